//! # Savefile Storage System Errors
//!
//! Defines [`StorageSystemError`], the enum covering everything that can go
//! wrong while saving, listing, deleting or reading back artifacts: kind and
//! extension mismatches, directory creation, encoder and decoder failures,
//! archive handling and configuration parsing.
use std::error::Error as StdError;
use std::path::PathBuf;
use thiserror::Error;

use crate::value::Kind;

type BoxedSource = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum StorageSystemError {
    #[error("Unsupported data type for saving: {description}")]
    UnsupportedType { description: String },

    #[error("{kind} cannot be saved with extension '{extension}'. Use one of: {}", allowed.join(", "))]
    IncompatibleFormat {
        kind: Kind,
        extension: String,
        allowed: &'static [&'static str],
    },

    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreationFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error during operation '{operation}' on path '{path}': {source}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization to '{format}' failed: {source}")]
    SerializationError {
        format: String,
        #[source]
        source: BoxedSource,
    },

    #[error("Deserialization from '{format}' failed: {source}")]
    DeserializationError {
        format: String,
        #[source]
        source: BoxedSource,
    },

    #[error("Invalid table: {reason}")]
    InvalidTable { reason: String },

    #[error("Invalid path provided: '{path}': {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    #[error("Archive error for '{path}': {reason}")]
    ArchiveError { path: PathBuf, reason: String },

    #[error("Unsupported configuration format: {0}")]
    UnsupportedConfigFormat(String),
}

// Helpers for building the variants that carry a boxed source.
impl StorageSystemError {
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        StorageSystemError::Io {
            source,
            operation: operation.into(),
            path,
        }
    }

    pub fn serialization(format: impl Into<String>, source: impl Into<BoxedSource>) -> Self {
        StorageSystemError::SerializationError {
            format: format.into(),
            source: source.into(),
        }
    }

    pub fn deserialization(format: impl Into<String>, source: impl Into<BoxedSource>) -> Self {
        StorageSystemError::DeserializationError {
            format: format.into(),
            source: source.into(),
        }
    }

    pub fn invalid_table(reason: impl Into<String>) -> Self {
        StorageSystemError::InvalidTable {
            reason: reason.into(),
        }
    }
}
