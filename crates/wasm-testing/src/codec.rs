//! Encoding and decoding of fixture records.
//!
//! Encoding is compact and keeps the field order of the record types, so the
//! output can be compared as a literal string. Decoding goes through a
//! [`serde_json::Value`] and reports the offending field on failure.

use serde::Serialize;
use serde_json::Value;

use crate::models::error::{DecodingError, EncodingError};

/// Encodes a record as compact JSON.
pub fn encode<T: Serialize + ?Sized>(record: &T) -> Result<String, EncodingError> {
    Ok(serde_json::to_string(record)?)
}

/// Encodes a record as indented JSON, as written in fixture files.
pub fn encode_pretty<T: Serialize + ?Sized>(record: &T) -> Result<String, EncodingError> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Decodes a record from JSON text.
pub fn decode<T>(text: &str) -> Result<T, DecodingError>
where
    T: TryFrom<Value, Error = DecodingError>,
{
    let value: Value = serde_json::from_str(text)?;
    T::try_from(value)
}
