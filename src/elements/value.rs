//! Form field value objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type-safe field values
///
/// `Text` carries everything a single input produces; `Files` carries the
/// file-name list of an upload element. Serialized untagged so persisted
/// search clauses stay plain strings or arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Files(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// True for an empty string or an empty file list
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Files(f) => f.is_empty(),
        }
    }

    /// Get the text value (returns empty string for file lists)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Files(_) => "",
        }
    }

    /// Get the file list (returns empty slice for text values)
    pub fn files(&self) -> &[String] {
        match self {
            FieldValue::Text(_) => &[],
            FieldValue::Files(f) => f,
        }
    }

    /// Build a value from a JSON configuration entry (e.g. `defaultValue`)
    pub fn from_json(value: &Value) -> Option<FieldValue> {
        match value {
            Value::String(s) => Some(FieldValue::Text(s.clone())),
            Value::Number(n) => Some(FieldValue::Text(n.to_string())),
            Value::Array(items) => Some(FieldValue::Files(
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect(),
            )),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(files: Vec<String>) -> Self {
        FieldValue::Files(files)
    }
}
