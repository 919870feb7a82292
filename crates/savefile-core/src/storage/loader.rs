//! Read-back helpers, one per kind, for artifacts written by the dispatcher.
use std::path::{Path, PathBuf};

use ndarray::ArrayD;
use serde_json::Value as JsonValue;

use crate::codec;
use crate::kernel::error::Result;
use crate::storage::error::StorageSystemError;
use crate::storage::local::LocalStorageProvider;
use crate::storage::provider::StorageProvider;
use crate::value::Table;

fn read(path: &Path) -> Result<Vec<u8>> {
    LocalStorageProvider::default().read_to_bytes(path)
}

pub fn load_table_csv(path: impl AsRef<Path>) -> Result<Table> {
    codec::table::decode_csv(&read(path.as_ref())?)
}

pub fn load_table_pickle(path: impl AsRef<Path>) -> Result<Table> {
    codec::table::decode_pickle(&read(path.as_ref())?)
}

pub fn load_array(path: impl AsRef<Path>) -> Result<ArrayD<f64>> {
    codec::array::decode_npy(&read(path.as_ref())?)
}

pub fn load_json(path: impl AsRef<Path>) -> Result<JsonValue> {
    codec::json::decode(&read(path.as_ref())?)
}

pub fn load_text(path: impl AsRef<Path>) -> Result<String> {
    LocalStorageProvider::default().read_to_string(path.as_ref())
}

/// Read a pickled byte blob.
pub fn load_blob(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    codec::pickle::decode_bytes(&read(path.as_ref())?)
}

/// Name and contents of the single entry of a zip archive written with
/// `compress = true`.
pub fn read_archive_entry(path: impl AsRef<Path>) -> Result<(String, Vec<u8>)> {
    let path = path.as_ref();
    codec::archive::read_first(path, &read(path)?)?.ok_or_else(|| {
        StorageSystemError::ArchiveError {
            path: PathBuf::from(path),
            reason: "archive has no entries".to_string(),
        }
        .into()
    })
}
