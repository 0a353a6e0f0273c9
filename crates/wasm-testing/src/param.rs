//! Typed parameters written in `type:value` notation.
//!
//! A parameter list is a comma separated sequence of items such as
//! `int:100, bool:true, address:admin`. String values cannot contain commas.

use std::fmt;

use address::Address;

use crate::models::{context::TestContext, error::ParamError};

pub const PARAM_SEPARATOR: char = ',';
pub const TYPE_SEPARATOR: char = ':';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Int(i64),
    Int128(i128),
    Bool(bool),
    String(String),
    Address(Address),
    /// Raw bytes, written as hex.
    ByteArray(Vec<u8>),
}

impl Param {
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Int128(_) => "int128",
            Self::Bool(_) => "bool",
            Self::String(_) => "string",
            Self::Address(_) => "address",
            Self::ByteArray(_) => "bytearray",
        }
    }

    /// Parses a single `type:value` item. Surrounding whitespace is ignored,
    /// except inside string values.
    pub fn parse(item: &str, ctx: &TestContext) -> Result<Self, ParamError> {
        let item = item.trim();
        let (ty, value) = item
            .split_once(TYPE_SEPARATOR)
            .ok_or_else(|| ParamError::MissingSeparator(item.to_string()))?;
        let invalid = |reason: String| ParamError::InvalidValue {
            item: item.to_string(),
            reason,
        };

        match ty.trim() {
            "int" => value
                .trim()
                .parse()
                .map(Self::Int)
                .map_err(|err| invalid(err.to_string())),
            "int128" => value
                .trim()
                .parse()
                .map(Self::Int128)
                .map_err(|err| invalid(err.to_string())),
            "bool" => value
                .trim()
                .parse()
                .map(Self::Bool)
                .map_err(|err| invalid(err.to_string())),
            "string" => Ok(Self::String(value.to_string())),
            "address" => ctx.resolve_address(value.trim()).map(Self::Address),
            "bytearray" => hex::decode(value.trim())
                .map(Self::ByteArray)
                .map_err(|err| invalid(err.to_string())),
            ty => Err(ParamError::UnknownType {
                ty: ty.to_string(),
                item: item.to_string(),
            }),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{TYPE_SEPARATOR}", self.type_name())?;
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Int128(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
            Self::Address(v) => write!(f, "{v}"),
            Self::ByteArray(v) => f.write_str(&hex::encode(v)),
        }
    }
}

/// Parses a parameter list. Blank input is an empty list.
pub fn parse_params(input: &str, ctx: &TestContext) -> Result<Vec<Param>, ParamError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(PARAM_SEPARATOR)
        .map(|item| Param::parse(item, ctx))
        .collect()
}

/// Parses an expected result: nothing for blank input, else exactly one item.
pub fn parse_expected(input: &str, ctx: &TestContext) -> Result<Option<Param>, ParamError> {
    let mut params = parse_params(input, ctx)?;
    match params.len() {
        0 => Ok(None),
        1 => Ok(params.pop()),
        n => Err(ParamError::TooManyResults(n)),
    }
}

/// Formats parameters back into notation, joined by `", "`.
pub fn format_params(params: &[Param]) -> String {
    params
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
