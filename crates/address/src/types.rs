use crate::{
    base58,
    consts::{ADDR_LEN, ADDR_VERSION, CHECKSUM_LEN, DECODED_LEN},
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::{fmt, str::FromStr};

/// A 20 bytes account or contract identifier.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub [u8; ADDR_LEN]);

/// The all-zero address.
pub const ADDRESS_EMPTY: Address = Address([0u8; ADDR_LEN]);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodingError {
    #[error("empty address")]
    Empty,
    #[error("invalid base58 character {char:?} at index {index}")]
    InvalidChar { char: char, index: usize },
    #[error("invalid address length {0}")]
    InvalidLength(usize),
    #[error("invalid address version {0:#04x}")]
    InvalidVersion(u8),
    #[error("address checksum mismatch")]
    ChecksumMismatch,
    #[error("invalid hex address: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = Sha256::digest(Sha256::digest(payload));
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&hash[..CHECKSUM_LEN]);
    checksum
}

impl Address {
    pub const fn new(bytes: [u8; ADDR_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodingError> {
        let bytes: [u8; ADDR_LEN] = bytes
            .try_into()
            .map_err(|_| DecodingError::InvalidLength(bytes.len()))?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; ADDR_LEN] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        *self == ADDRESS_EMPTY
    }

    /// Encodes the address as base58check: version byte, address bytes and
    /// the first 4 bytes of the double sha256 of both.
    pub fn to_base58(&self) -> String {
        let mut data = Vec::with_capacity(DECODED_LEN);
        data.push(ADDR_VERSION);
        data.extend_from_slice(&self.0);
        let checksum = checksum(&data);
        data.extend_from_slice(&checksum);
        base58::encode(&data)
    }

    pub fn from_base58(encoded: &str) -> Result<Self, DecodingError> {
        if encoded.is_empty() {
            return Err(DecodingError::Empty);
        }
        let decoded = base58::decode(encoded)?;
        if decoded.len() != DECODED_LEN {
            return Err(DecodingError::InvalidLength(decoded.len()));
        }

        let (payload, expected) = decoded.split_at(1 + ADDR_LEN);
        if payload[0] != ADDR_VERSION {
            return Err(DecodingError::InvalidVersion(payload[0]));
        }
        if checksum(payload) != expected {
            return Err(DecodingError::ChecksumMismatch);
        }
        Self::from_bytes(&payload[1..])
    }

    /// Hex form of the address, bytes in reverse order.
    pub fn to_hex_string(&self) -> String {
        let reversed: Vec<u8> = self.0.iter().rev().copied().collect();
        hex::encode(reversed)
    }

    pub fn from_hex_string(s: &str) -> Result<Self, DecodingError> {
        let mut bytes = hex::decode(s.strip_prefix("0x").unwrap_or(s))?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }
}

impl From<[u8; ADDR_LEN]> for Address {
    fn from(bytes: [u8; ADDR_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}

impl FromStr for Address {
    type Err = DecodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_base58(&s).map_err(de::Error::custom)
    }
}
