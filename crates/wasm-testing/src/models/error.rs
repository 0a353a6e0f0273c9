use std::path::PathBuf;

/// Error returned when a fixture record cannot be rendered as JSON.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("An error occurred serializing the fixture: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned when a fixture record cannot be read from JSON.
#[derive(Debug, thiserror::Error)]
pub enum DecodingError {
    /// The text is not well-formed JSON
    #[error("An error occurred parsing the fixture: {0}")]
    Json(#[from] serde_json::Error),
    /// A required field is absent
    #[error("missing field `{0}`")]
    MissingField(String),
    /// A field holds a value of the wrong JSON type
    #[error("invalid type for `{field}`: expected {expected}, found {found}")]
    InvalidType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
    /// An address string failed validation
    #[error("invalid address in `{field}`: {source}")]
    InvalidAddress {
        field: String,
        #[source]
        source: address::DecodingError,
    },
}

/// Error returned when a `type:value` parameter list cannot be interpreted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    #[error("missing `:` in parameter `{0}`")]
    MissingSeparator(String),
    #[error("unknown parameter type `{ty}` in `{item}`")]
    UnknownType { ty: String, item: String },
    #[error("invalid value in parameter `{item}`: {reason}")]
    InvalidValue { item: String, reason: String },
    #[error("unknown address `{0}`")]
    UnknownAddress(String),
    #[error("expected a single result, found {0}")]
    TooManyResults(usize),
}

/// Error type based off the fixture loader's file handling
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// An IO error occurred
    #[error("An error occurred interacting with the file system at {path}: {error}")]
    Io {
        /// The path to the file or directory
        path: PathBuf,
        /// The specific error
        error: String,
    },
    /// A fixture file could not be decoded
    #[error("An error occurred deserializing the fixture at {path}: {error}")]
    CouldNotDeserialize {
        /// The path to the file
        path: PathBuf,
        /// The specific error
        error: String,
    },
    /// A fixture file could not be encoded
    #[error("An error occurred serializing the fixture at {path}: {error}")]
    CouldNotSerialize { path: PathBuf, error: String },
}
