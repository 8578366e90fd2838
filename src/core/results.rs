//! Project-level aggregate handed back to callers.

use super::settings::{json_type_name, AnalysisSettings};
use super::types::ModuleReport;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Aggregate statistics written by the default metrics plugin.
///
/// Means are taken per module first (over its functions, or its aggregate
/// when it has none) and then across modules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetrics {
    pub module_count: usize,
    pub function_count: usize,
    pub dependency_count: usize,
    /// Mean per-function logical SLOC.
    pub loc: f64,
    /// Mean per-function cyclomatic complexity.
    pub cyclomatic: f64,
    /// Mean per-function cognitive complexity.
    pub cognitive: f64,
    /// Mean per-function declared parameter count.
    pub params: f64,
    /// Mean per-function maximum nesting depth.
    pub max_nesting: f64,
}

/// Module reports plus whatever project-level fields the plugins populated.
///
/// The shape is independent of in-memory plugin state so a result can be
/// persisted and fed back into
/// [`ProjectAnalyzer::process_results`](crate::project::ProjectAnalyzer::process_results)
/// in a later process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectResult {
    pub reports: Vec<ModuleReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<AnalysisSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ProjectMetrics>,
    /// Fields written by third-party plugins, keyed by field name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: BTreeMap<String, Value>,
}

impl ProjectResult {
    pub fn new(reports: Vec<ModuleReport>) -> Self {
        Self {
            reports,
            ..Self::default()
        }
    }

    /// Rebuild a result from a JSON value, e.g. one read back from a cache.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::invalid_argument(format!(
                "`results` is not an object (got {})",
                json_type_name(&value)
            )));
        }
        serde_json::from_value(value)
            .map_err(|e| Error::invalid_argument(format!("`results` is malformed: {}", e)))
    }

    /// True when no project-level field has been computed.
    pub fn is_partial(&self) -> bool {
        self.metrics.is_none() && self.extensions.is_empty()
    }
}
