//! NumPy `.npy` encoding of numeric arrays.
use ndarray::ArrayD;
use ndarray_npy::{ReadNpyExt, WriteNpyExt};

use crate::kernel::error::Result;
use crate::storage::error::StorageSystemError;

const NPY: &str = "npy";

pub fn encode_npy(array: &ArrayD<f64>) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    array
        .write_npy(&mut buf)
        .map_err(|e| StorageSystemError::serialization(NPY, e.to_string()))?;
    Ok(buf)
}

pub fn decode_npy(bytes: &[u8]) -> Result<ArrayD<f64>> {
    ArrayD::<f64>::read_npy(bytes)
        .map_err(|e| StorageSystemError::deserialization(NPY, e.to_string()).into())
}
