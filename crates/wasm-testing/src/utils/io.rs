use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{codec, models::error::LoaderError};

pub(crate) fn load_file(path: &Path) -> Result<String, LoaderError> {
    fs::read_to_string(path).map_err(|error| LoaderError::Io {
        path: path.into(),
        error: error.to_string(),
    })
}

pub(crate) fn deserialize_into<T: for<'a> Deserialize<'a>>(
    val: &str,
    path: &Path,
) -> Result<T, LoaderError> {
    serde_json::from_str(val).map_err(|error| LoaderError::CouldNotDeserialize {
        path: path.into(),
        error: error.to_string(),
    })
}

pub(crate) fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), LoaderError> {
    let content = codec::encode_pretty(value).map_err(|error| LoaderError::CouldNotSerialize {
        path: path.into(),
        error: error.to_string(),
    })?;
    fs::write(path, content).map_err(|error| LoaderError::Io {
        path: path.into(),
        error: error.to_string(),
    })
}
