//! Turning command-line input into a storable value.
use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use savefile_core::codec;
use savefile_core::{Error, Result, StorableValue, StorageSystemError};

/// How `save` interprets its input bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// UTF-8 text
    Text,
    /// A JSON array or object
    Json,
    /// Raw bytes, stored as a binary blob
    Bytes,
    /// Headed CSV, stored as a table
    Csv,
}

/// Read the whole input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path).map_err(|e| Error::io(e, "read_input", path.to_path_buf())),
        None => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .map_err(|e| Error::io(e, "read_stdin", "-".into()))?;
            Ok(buffer)
        }
    }
}

pub fn parse_value(bytes: Vec<u8>, format: InputFormat) -> Result<StorableValue> {
    match format {
        InputFormat::Text => String::from_utf8(bytes)
            .map(StorableValue::Text)
            .map_err(|e| StorageSystemError::deserialization("text", e).into()),
        InputFormat::Json => Ok(StorableValue::Json(codec::json::decode(&bytes)?)),
        InputFormat::Bytes => Ok(StorableValue::Binary(bytes)),
        InputFormat::Csv => Ok(StorableValue::Table(codec::table::decode_csv(&bytes)?)),
    }
}
