use crate::analyzers::JavaScriptConfig;
use crate::core::AnalysisOptions;
use crate::project::ProjectAnalyzerOptions;
use serde::{Deserialize, Serialize};

/// Root configuration structure, read from `.complexity.toml`.
///
/// ```toml
/// load_default_plugins = true
///
/// [analysis]
/// skipCalculation = false
/// noCoreSize = true
///
/// [module]
/// logicalor = true
/// forin = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// When false only explicitly supplied plugins are registered
    pub load_default_plugins: bool,

    /// Options passed to every `analyze` / `process_results` call
    pub analysis: AnalysisOptions,

    /// Module analyzer configuration
    pub module: JavaScriptConfig,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            load_default_plugins: true,
            analysis: AnalysisOptions::default(),
            module: JavaScriptConfig::default(),
        }
    }
}

impl ProjectConfig {
    /// Construction options for a JavaScript project analyzer. Plugins are
    /// not configurable from a file; add them to the returned options.
    pub fn analyzer_options(&self) -> ProjectAnalyzerOptions<JavaScriptConfig> {
        ProjectAnalyzerOptions {
            load_default_plugins: self.load_default_plugins,
            plugins: Vec::new(),
            module: self.module,
        }
    }

    pub fn analysis_options(&self) -> &AnalysisOptions {
        &self.analysis
    }
}
