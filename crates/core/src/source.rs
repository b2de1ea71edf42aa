use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{AssetGraphError, Result};

/// Parses a JSON document into a forest of root-level items.
///
/// The document root must be an array; each element is one root item.
pub fn parse_items(input: &str) -> Result<Vec<Value>> {
    let doc: Value = serde_json::from_str(input)?;
    match doc {
        Value::Array(items) => Ok(items),
        other => Err(AssetGraphError::InvalidItems(format!(
            "expected a top-level array of items, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Reads and parses a forest of items from a JSON file.
pub fn load_items_file(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path)?;
    parse_items(&content)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
