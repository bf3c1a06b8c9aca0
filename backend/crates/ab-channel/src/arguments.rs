use crate::{BridgeError, Result};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named argument bag of a boundary request.
///
/// A key that is absent or `null` is a missing argument; a key holding the
/// wrong JSON type is an invalid one. Both are reported before any provider
/// call is issued.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arguments(Map<String, Value>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn require_string(&self, key: &str) -> Result<String> {
        match self.present(key)? {
            Value::String(value) => Ok(value.clone()),
            _ => Err(BridgeError::invalid_argument(key, "string")),
        }
    }

    pub fn require_bool(&self, key: &str) -> Result<bool> {
        self.present(key)?
            .as_bool()
            .ok_or_else(|| BridgeError::invalid_argument(key, "bool"))
    }

    pub fn require_i64(&self, key: &str) -> Result<i64> {
        self.present(key)?
            .as_i64()
            .ok_or_else(|| BridgeError::invalid_argument(key, "integer"))
    }

    #[track_caller]
    fn present(&self, key: &str) -> Result<&Value> {
        match self.0.get(key) {
            None | Some(Value::Null) => Err(BridgeError::missing_argument(key)),
            Some(value) => Ok(value),
        }
    }
}

impl From<Map<String, Value>> for Arguments {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
