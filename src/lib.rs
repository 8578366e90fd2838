// Export modules for library usage
pub mod analyzers;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod pipeline;
pub mod project;

// Re-export commonly used types
pub use crate::core::{
    AnalysisOptions, AnalysisSettings, Dependency, DependencyKind, FunctionReport,
    ModuleAggregate, ModuleInput, ModuleReport, ProjectMetrics, ProjectResult, Sloc,
};

pub use crate::analyzers::{
    JavaScriptAst, JavaScriptConfig, JavaScriptModuleAnalyzer, ModuleAnalyzer,
};

pub use crate::errors::{AnalyzerError, AnalyzerErrorKind, Error, Result};

pub use crate::pipeline::{HookPlugin, LifecycleHook, Plugin, PluginPipeline, ProjectMetricsPlugin};

pub use crate::project::{JavaScriptProjectAnalyzer, ProjectAnalyzer, ProjectAnalyzerOptions};
