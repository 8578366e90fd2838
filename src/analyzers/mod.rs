use crate::core::{AnalysisOptions, ModuleReport};
use crate::errors::AnalyzerError;

pub mod javascript;

pub use javascript::{JavaScriptAst, JavaScriptConfig, JavaScriptModuleAnalyzer};

/// Produces a [`ModuleReport`] for one already-parsed module.
///
/// Implementations see the caller's options verbatim. Provenance fields on the
/// returned report are overwritten by the project analyzer.
pub trait ModuleAnalyzer: Send + Sync {
    type Ast;
    type Config;

    fn from_config(config: Self::Config) -> Self
    where
        Self: Sized;

    fn analyze(
        &self,
        ast: &Self::Ast,
        options: &AnalysisOptions,
    ) -> Result<ModuleReport, AnalyzerError>;
}
