//! # Encoders
//!
//! One encoder per [`Kind`](crate::value::Kind), selected by [`encode`] after
//! the dispatcher has classified the value and validated the extension. Every
//! encoder produces the complete file contents in memory; writing them out is
//! left to the storage provider. The matching decoders back the read-back
//! helpers in [`loader`](crate::storage::loader).
pub mod archive;
pub mod array;
pub mod figure;
pub mod json;
pub mod pdf;
pub mod pickle;
pub mod table;

use crate::kernel::error::Result;
use crate::storage::error::StorageSystemError;
use crate::value::StorableValue;

/// Encode `value` in the format implied by `extension` (normalized, with
/// leading dot). Extensions must already be validated against the value's
/// kind.
pub fn encode(value: StorableValue, extension: &str) -> Result<Vec<u8>> {
    match (value, extension) {
        (StorableValue::Table(t), ".csv") => table::encode_csv(&t),
        (StorableValue::Table(t), ".pkl" | ".pickle") => table::encode_pickle(&t),
        (StorableValue::NumericArray(a), ".npy") => array::encode_npy(&a),
        (StorableValue::Json(v), ".json") => json::encode_pretty(&v),
        (StorableValue::Text(s), ".txt") => Ok(s.into_bytes()),
        (StorableValue::Binary(b), ".pkl" | ".pickle") => pickle::encode_bytes(&b),
        (StorableValue::Figure(f), ext) => figure::encode(f, ext),
        (value, ext) => Err(StorageSystemError::UnsupportedType {
            description: format!(
                "no encoder for {} as '{}'",
                value.classify().map(|k| k.name()).unwrap_or("value"),
                ext
            ),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests;
