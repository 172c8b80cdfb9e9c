//! Generic persisted-settings container handed to option pages.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PaintOpError;

/// String-keyed property bag used to persist paint option settings.
///
/// Option pages write scalar properties under stable keys and read them back
/// with typed accessors. Missing keys and type mismatches fall back to the
/// caller-supplied default, so stale or partial settings never abort a read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertiesConfiguration {
    properties: BTreeMap<String, Value>,
}

impl PropertiesConfiguration {
    /// Create an empty settings container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a property under the given key, replacing any previous value.
    pub fn set_property(&mut self, key: &str, value: impl Into<Value>) {
        self.properties.insert(key.to_string(), value.into());
    }

    /// Store any serializable value under the given key.
    pub fn set_serialized<T: Serialize>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<(), PaintOpError> {
        let value = serde_json::to_value(value)?;
        self.properties.insert(key.to_string(), value);
        Ok(())
    }

    /// Read a float property, falling back to `default` when the key is
    /// missing or holds a non-numeric value.
    pub fn get_f32(&self, key: &str, default: f32) -> f32 {
        self.properties
            .get(key)
            .and_then(|v| v.as_f64())
            .map(|v| v as f32)
            .unwrap_or(default)
    }

    /// Read an integer property with a fallback default.
    pub fn get_i32(&self, key: &str, default: i32) -> i32 {
        self.properties
            .get(key)
            .and_then(|v| v.as_i64())
            .map(|v| v as i32)
            .unwrap_or(default)
    }

    /// Read a boolean property with a fallback default.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.properties
            .get(key)
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    }

    /// Read a string property with a fallback default.
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.properties
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or(default)
            .to_string()
    }

    /// Deserialize a structured property. Returns `None` when the key is
    /// missing or the stored value does not match `T`.
    pub fn get_deserialized<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.properties.get(key)?;
        serde_json::from_value(value.clone()).ok()
    }

    /// Whether a property exists under the given key.
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Whether the container holds no properties at all.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Serialize the whole container to a JSON string.
    pub fn to_json(&self) -> Result<String, PaintOpError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a container from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, PaintOpError> {
        Ok(serde_json::from_str(json)?)
    }
}
