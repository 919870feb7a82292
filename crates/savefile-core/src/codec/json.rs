use serde::Serialize;
use serde_json::Value as JsonValue;
use serde_json::ser::PrettyFormatter;

use crate::kernel::error::Result;
use crate::storage::error::StorageSystemError;

const JSON: &str = "json";
const INDENT: &[u8] = b"    ";

/// Pretty-print with four-space indentation and no trailing newline.
pub fn encode_pretty(value: &JsonValue) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut serializer)
        .map_err(|e| StorageSystemError::serialization(JSON, e))?;
    Ok(buf)
}

pub fn decode(bytes: &[u8]) -> Result<JsonValue> {
    serde_json::from_slice(bytes).map_err(|e| StorageSystemError::deserialization(JSON, e).into())
}
