//! # Storable Values
//!
//! [`StorableValue`] is the tagged union of everything the dispatcher knows
//! how to persist. [`StorableValue::classify`] maps a value onto its [`Kind`],
//! which in turn owns the set of accepted file extensions.
pub mod figure;
mod kind;
pub mod table;

use ndarray::ArrayD;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::kernel::error::Result;
use crate::storage::error::StorageSystemError;

pub use figure::{Canvas, Figure, Rgb, Series, SeriesStyle};
pub use kind::Kind;
pub use table::{Cell, Column, Table};

/// A value handed to the dispatcher for saving.
#[derive(Debug, Clone, PartialEq)]
pub enum StorableValue {
    Table(Table),
    NumericArray(ArrayD<f64>),
    /// Only arrays and objects are storable
    Json(JsonValue),
    Text(String),
    Binary(Vec<u8>),
    Figure(Figure),
}

impl StorableValue {
    /// Build a JSON value from anything serializable.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let value = serde_json::to_value(value)
            .map_err(|e| StorageSystemError::serialization("json", e))?;
        Ok(StorableValue::Json(value))
    }

    /// Classify the value into its kind.
    ///
    /// JSON scalars are not storable: only lists and mappings are.
    pub fn classify(&self) -> std::result::Result<Kind, StorageSystemError> {
        match self {
            StorableValue::Table(_) => Ok(Kind::Table),
            StorableValue::NumericArray(_) => Ok(Kind::NumericArray),
            StorableValue::Json(JsonValue::Array(_) | JsonValue::Object(_)) => Ok(Kind::Json),
            StorableValue::Json(other) => Err(StorageSystemError::UnsupportedType {
                description: format!("JSON {} (only arrays and objects can be saved)", json_type_name(other)),
            }),
            StorableValue::Text(_) => Ok(Kind::Text),
            StorableValue::Binary(_) => Ok(Kind::Binary),
            StorableValue::Figure(_) => Ok(Kind::Figure),
        }
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

impl From<Table> for StorableValue {
    fn from(v: Table) -> Self {
        StorableValue::Table(v)
    }
}

impl From<ArrayD<f64>> for StorableValue {
    fn from(v: ArrayD<f64>) -> Self {
        StorableValue::NumericArray(v)
    }
}

impl From<JsonValue> for StorableValue {
    fn from(v: JsonValue) -> Self {
        StorableValue::Json(v)
    }
}

impl From<String> for StorableValue {
    fn from(v: String) -> Self {
        StorableValue::Text(v)
    }
}

impl From<&str> for StorableValue {
    fn from(v: &str) -> Self {
        StorableValue::Text(v.to_string())
    }
}

impl From<Vec<u8>> for StorableValue {
    fn from(v: Vec<u8>) -> Self {
        StorableValue::Binary(v)
    }
}

impl From<Figure> for StorableValue {
    fn from(v: Figure) -> Self {
        StorableValue::Figure(v)
    }
}

#[cfg(test)]
mod tests;
