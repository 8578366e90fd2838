//! Data contracts shared by the pipeline, the analyzers and their callers.

pub mod results;
pub mod settings;
pub mod types;

pub use results::{ProjectMetrics, ProjectResult};
pub use settings::{AnalysisOptions, AnalysisSettings, SKIP_CALCULATION};
pub use types::{
    Dependency, DependencyKind, FunctionReport, ModuleAggregate, ModuleInput, ModuleReport, Sloc,
};
