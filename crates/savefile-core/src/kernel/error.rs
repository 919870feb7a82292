//! # Savefile Core Errors
//!
//! Defines the crate-wide [`Error`] type.
//!
//! Subsystem errors (currently [`StorageSystemError`]) are wrapped through
//! `#[from]` conversions so that every public operation can return a single
//! [`Result`] type while callers can still match on the typed cause.
use std::path::PathBuf;
use std::result::Result as StdResult;

use crate::storage::error::StorageSystemError;
use thiserror::Error as ThisError;

/// Crate-wide error type
#[derive(Debug, ThisError)]
pub enum Error {
    /// Specific, typed storage system error
    #[error("Storage system error: {0}")]
    StorageSystem(#[from] StorageSystemError),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl Error {
    /// Create an I/O error carrying the failed operation and path.
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        Error::StorageSystem(StorageSystemError::io(source, operation, path))
    }
}
