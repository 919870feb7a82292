//! Generic serialization in the Python pickle format.
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_pickle::{DeOptions, SerOptions};

use crate::kernel::error::Result;
use crate::storage::error::StorageSystemError;

const PICKLE: &str = "pickle";

pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_pickle::to_vec(value, SerOptions::new())
        .map_err(|e| StorageSystemError::serialization(PICKLE, e.to_string()).into())
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_pickle::from_slice(bytes, DeOptions::new())
        .map_err(|e| StorageSystemError::deserialization(PICKLE, e.to_string()).into())
}

/// Pickle a byte blob as a Python `bytes` object.
pub fn encode_bytes(bytes: &[u8]) -> Result<Vec<u8>> {
    encode(&serde_bytes::Bytes::new(bytes))
}

pub fn decode_bytes(bytes: &[u8]) -> Result<Vec<u8>> {
    let buf: serde_bytes::ByteBuf = decode(bytes)?;
    Ok(buf.into_vec())
}
