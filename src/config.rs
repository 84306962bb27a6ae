//! Element configuration handling

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// String-keyed configuration attached to a form element.
///
/// Values are arbitrary JSON values so hosts can carry anything a renderer
/// or element variant understands (placeholder text, css classes, upload
/// directory, date format, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Configuration(HashMap<String, Value>);

impl Configuration {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for chaining at form-build time
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a setting
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value for a key, if it is a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Boolean value for a key, if it is a boolean
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Boolean value with a fallback
    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or(default)
    }

    /// True if the key is present
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Fill in settings from `defaults` without overwriting existing keys
    pub fn merge_defaults(&mut self, defaults: Configuration) {
        for (key, value) in defaults.0 {
            self.0.entry(key).or_insert(value);
        }
    }
}
