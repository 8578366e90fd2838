//! Caller options and the per-call settings derived from them.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Option key controlling skip-calculation mode.
pub const SKIP_CALCULATION: &str = "skipCalculation";

/// Caller-supplied options record.
///
/// Keys are passed through untouched: the per-module analyzer receives this
/// record verbatim and plugins read whatever keys they recognize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisOptions(Map<String, Value>);

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from an arbitrary JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::invalid_argument(format!(
                "`options` is not an object (got {})",
                json_type_name(&other)
            ))),
        }
    }

    /// Set a key, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The value under `key` when it is a boolean; anything else reads as absent.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for AnalysisOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Normalized settings produced once per call by the configure phase.
///
/// Plugins may add entries to `extra` while handling `on_configure`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSettings {
    #[serde(default)]
    pub skip_calculation: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalysisSettings {
    /// Defaults derived from `options`. Only `skipCalculation` is read here, and
    /// only when it holds a boolean.
    pub fn from_options(options: &AnalysisOptions) -> Self {
        Self {
            skip_calculation: options.get_bool(SKIP_CALCULATION).unwrap_or(false),
            extra: Map::new(),
        }
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.extra.get(key).and_then(Value::as_bool)
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
