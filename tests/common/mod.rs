// Test utility module for project_complexity integration tests
#![allow(dead_code)]

use parking_lot::Mutex;
use project_complexity::analyzers::ModuleAnalyzer;
use project_complexity::core::{
    AnalysisOptions, AnalysisSettings, ModuleAggregate, ModuleInput, ModuleReport, Sloc,
};
use project_complexity::errors::AnalyzerError;
use project_complexity::pipeline::{
    ConfigureEvent, LifecycleHook, Plugin, PluginPipeline, ProjectEndEvent, ProjectStartEvent,
};
use project_complexity::project::ProjectAnalyzer;
use std::sync::Arc;

/// Shared, ordered record of hook invocations across plugins.
pub type EventLog = Arc<Mutex<Vec<String>>>;

pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Records `"{name}:{hook}"` for every hook it receives.
pub struct SpyPlugin {
    name: String,
    log: EventLog,
    settings_seen: Arc<Mutex<Vec<AnalysisSettings>>>,
}

impl SpyPlugin {
    pub fn new(name: &str, log: &EventLog) -> Self {
        Self {
            name: name.to_string(),
            log: log.clone(),
            settings_seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn settings_seen(&self) -> Arc<Mutex<Vec<AnalysisSettings>>> {
        self.settings_seen.clone()
    }

    fn record(&self, hook: LifecycleHook) {
        self.log.lock().push(format!("{}:{}", self.name, hook));
    }
}

impl Plugin for SpyPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn hooks(&self) -> &[LifecycleHook] {
        &[
            LifecycleHook::Configure,
            LifecycleHook::ProjectStart,
            LifecycleHook::ProjectEnd,
        ]
    }

    fn on_configure(&self, _event: &mut ConfigureEvent<'_>) -> anyhow::Result<()> {
        self.record(LifecycleHook::Configure);
        Ok(())
    }

    fn on_project_start(&self, event: &ProjectStartEvent<'_>) -> anyhow::Result<()> {
        self.record(LifecycleHook::ProjectStart);
        self.settings_seen.lock().push(event.settings.clone());
        Ok(())
    }

    fn on_project_end(&self, _event: &mut ProjectEndEvent<'_>) -> anyhow::Result<()> {
        self.record(LifecycleHook::ProjectEnd);
        Ok(())
    }
}

/// Count of log entries for `hook` across all plugins.
pub fn count_hook(log: &EventLog, hook: LifecycleHook) -> usize {
    let suffix = format!(":{}", hook);
    log.lock().iter().filter(|e| e.ends_with(&suffix)).count()
}

/// AST stand-in: the analyzer either fails with `fail_with` or reports
/// `cyclomatic`.
#[derive(Debug, Clone, Default)]
pub struct StubAst {
    pub cyclomatic: u32,
    pub fail_with: Option<AnalyzerError>,
}

impl StubAst {
    pub fn ok(cyclomatic: u32) -> Self {
        Self {
            cyclomatic,
            fail_with: None,
        }
    }

    pub fn failing(error: AnalyzerError) -> Self {
        Self {
            cyclomatic: 0,
            fail_with: Some(error),
        }
    }
}

/// Module analyzer that records every call it receives.
#[derive(Default)]
pub struct StubAnalyzer {
    pub calls: Mutex<Vec<u32>>,
    pub options_seen: Mutex<Vec<AnalysisOptions>>,
}

impl ModuleAnalyzer for StubAnalyzer {
    type Ast = StubAst;
    type Config = ();

    fn from_config(_config: ()) -> Self {
        Self::default()
    }

    fn analyze(
        &self,
        ast: &StubAst,
        options: &AnalysisOptions,
    ) -> Result<ModuleReport, AnalyzerError> {
        self.calls.lock().push(ast.cyclomatic);
        self.options_seen.lock().push(options.clone());
        if let Some(error) = &ast.fail_with {
            return Err(error.clone());
        }
        Ok(ModuleReport::new(ModuleAggregate {
            sloc: Sloc {
                physical: 1,
                logical: 1,
            },
            cyclomatic: ast.cyclomatic,
            cyclomatic_density: ModuleAggregate::density(ast.cyclomatic, 1),
            ..ModuleAggregate::default()
        }))
    }
}

pub fn stub_project(
    load_default_plugins: bool,
    plugins: Vec<Box<dyn Plugin>>,
) -> ProjectAnalyzer<StubAnalyzer> {
    ProjectAnalyzer::with_parts(
        StubAnalyzer::default(),
        PluginPipeline::new(load_default_plugins, plugins),
    )
}

pub fn stub_modules(paths: &[&str]) -> Vec<ModuleInput<StubAst>> {
    paths
        .iter()
        .enumerate()
        .map(|(i, path)| ModuleInput::new(StubAst::ok(i as u32 + 1), *path))
        .collect()
}
