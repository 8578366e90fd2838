//! Project analysis orchestration.
//!
//! [`ProjectAnalyzer`] validates inputs, drives the plugin lifecycle
//! (configure, start, end), runs the module analyzer once per module and
//! attaches provenance to each report.
//!
//! # Example
//!
//! ```rust
//! use project_complexity::analyzers::JavaScriptAst;
//! use project_complexity::core::{AnalysisOptions, ModuleInput};
//! use project_complexity::project::JavaScriptProjectAnalyzer;
//!
//! let analyzer = JavaScriptProjectAnalyzer::default();
//! let ast = JavaScriptAst::parse(r#"if (true) { "foo"; } else { "bar"; }"#).unwrap();
//! let result = analyzer
//!     .analyze(&[ModuleInput::new(ast, "a")], &AnalysisOptions::new())
//!     .unwrap();
//!
//! assert_eq!(result.reports.len(), 1);
//! assert_eq!(result.reports[0].src_path, "a");
//! assert_eq!(result.metrics.unwrap().cyclomatic, 2.0);
//! ```

use crate::analyzers::{JavaScriptModuleAnalyzer, ModuleAnalyzer};
use crate::core::{AnalysisOptions, ModuleInput, ProjectResult};
use crate::errors::{Error, Result};
use crate::pipeline::{Plugin, PluginPipeline};
use tracing::{debug, info_span};

/// Construction options.
pub struct ProjectAnalyzerOptions<C> {
    /// When false no built-in plugin is registered.
    pub load_default_plugins: bool,
    /// Registered after the default plugins, in this order.
    pub plugins: Vec<Box<dyn Plugin>>,
    /// Forwarded to the module analyzer's constructor.
    pub module: C,
}

impl<C: Default> Default for ProjectAnalyzerOptions<C> {
    fn default() -> Self {
        Self {
            load_default_plugins: true,
            plugins: Vec::new(),
            module: C::default(),
        }
    }
}

impl<C> ProjectAnalyzerOptions<C> {
    pub fn with_plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn without_default_plugins(mut self) -> Self {
        self.load_default_plugins = false;
        self
    }
}

pub struct ProjectAnalyzer<A: ModuleAnalyzer = JavaScriptModuleAnalyzer> {
    pipeline: PluginPipeline,
    module_analyzer: A,
}

impl<A: ModuleAnalyzer> ProjectAnalyzer<A> {
    pub fn new(options: ProjectAnalyzerOptions<A::Config>) -> Self {
        Self {
            pipeline: PluginPipeline::new(options.load_default_plugins, options.plugins),
            module_analyzer: A::from_config(options.module),
        }
    }

    /// Use an already-built module analyzer and pipeline.
    pub fn with_parts(module_analyzer: A, pipeline: PluginPipeline) -> Self {
        Self {
            pipeline,
            module_analyzer,
        }
    }

    pub fn pipeline(&self) -> &PluginPipeline {
        &self.pipeline
    }

    pub fn module_analyzer(&self) -> &A {
        &self.module_analyzer
    }

    /// Analyze `modules` in order and compute project metrics via plugins.
    ///
    /// With `skipCalculation` set the end phase is not run and the result
    /// holds only module reports.
    pub fn analyze(
        &self,
        modules: &[ModuleInput<A::Ast>],
        options: &AnalysisOptions,
    ) -> Result<ProjectResult> {
        let _span = info_span!("analyze_project", modules = modules.len()).entered();

        validate_modules(modules)?;

        let settings = self.pipeline.configure(options)?;
        self.pipeline.start(&settings)?;

        let mut reports = Vec::with_capacity(modules.len());
        for module in modules {
            debug!(src_path = %module.src_path, "Analyzing module");
            let mut report = self
                .module_analyzer
                .analyze(&module.ast, options)
                .map_err(|e| Error::module_analysis(module.src_path.as_str(), e))?;
            report.attach_provenance(module);
            reports.push(report);
        }

        let skip_calculation = settings.skip_calculation;
        let mut results = ProjectResult::new(reports);
        results.settings = Some(settings);

        if skip_calculation {
            debug!("Skipping project metric calculation");
            return Ok(results);
        }

        self.pipeline.end(&mut results)?;
        Ok(results)
    }

    /// Recompute project metrics for existing results without re-analyzing
    /// any module. Returns the same value it was given.
    pub fn process_results(
        &self,
        mut results: ProjectResult,
        options: &AnalysisOptions,
    ) -> Result<ProjectResult> {
        self.process_results_in_place(&mut results, options)?;
        Ok(results)
    }

    /// [`process_results`](Self::process_results) on a borrowed result.
    pub fn process_results_in_place(
        &self,
        results: &mut ProjectResult,
        options: &AnalysisOptions,
    ) -> Result<()> {
        let _span = info_span!("process_results", reports = results.reports.len()).entered();

        let settings = self.pipeline.configure(options)?;
        self.pipeline.start(&settings)?;
        results.settings = Some(settings);
        self.pipeline.end(results)?;
        Ok(())
    }

    /// Async form of [`analyze`](Self::analyze); same result, same error.
    pub async fn analyze_async(
        &self,
        modules: &[ModuleInput<A::Ast>],
        options: &AnalysisOptions,
    ) -> Result<ProjectResult> {
        self.analyze(modules, options)
    }

    /// Async form of [`process_results`](Self::process_results).
    pub async fn process_results_async(
        &self,
        results: ProjectResult,
        options: &AnalysisOptions,
    ) -> Result<ProjectResult> {
        self.process_results(results, options)
    }
}

/// Project analyzer backed by the built-in JavaScript module analyzer.
pub type JavaScriptProjectAnalyzer = ProjectAnalyzer<JavaScriptModuleAnalyzer>;

impl Default for JavaScriptProjectAnalyzer {
    fn default() -> Self {
        Self::new(ProjectAnalyzerOptions::default())
    }
}

/// Every module needs a usable `src_path`; checked before any hook fires.
fn validate_modules<T>(modules: &[ModuleInput<T>]) -> Result<()> {
    match modules.iter().position(|m| !m.has_valid_src_path()) {
        Some(index) => Err(Error::invalid_argument(format!(
            "module {} has a missing or empty `src_path`",
            index
        ))),
        None => Ok(()),
    }
}
