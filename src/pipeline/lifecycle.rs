//! Ordered broadcast of lifecycle events to registered plugins.

use super::metrics::ProjectMetricsPlugin;
use super::plugin::{ConfigureEvent, LifecycleHook, Plugin, ProjectEndEvent, ProjectStartEvent};
use crate::core::{AnalysisOptions, AnalysisSettings, ProjectResult};
use crate::errors::{Error, Result};
use tracing::trace;

/// Owns the registered plugins and sequences their hooks.
///
/// Every phase visits plugins in registration order. Later plugins can rely
/// on fields written by earlier ones; the pipeline never reorders them.
pub struct PluginPipeline {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginPipeline {
    /// Register the default plugins (when requested) followed by `plugins`.
    pub fn new(load_default_plugins: bool, plugins: Vec<Box<dyn Plugin>>) -> Self {
        let mut registered: Vec<Box<dyn Plugin>> = Vec::with_capacity(plugins.len() + 1);
        if load_default_plugins {
            registered.extend(default_plugins());
        }
        registered.extend(plugins);
        Self {
            plugins: registered,
        }
    }

    /// Build settings from `options` and let each plugin adjust them.
    pub fn configure(&self, options: &AnalysisOptions) -> Result<AnalysisSettings> {
        let mut settings = AnalysisSettings::from_options(options);
        for plugin in self.participants(LifecycleHook::Configure) {
            trace!(plugin = plugin.name(), "onConfigure");
            let mut event = ConfigureEvent {
                options,
                settings: &mut settings,
            };
            plugin.on_configure(&mut event).map_err(Error::Collaborator)?;
        }
        Ok(settings)
    }

    /// Notify plugins that a project run is starting.
    pub fn start(&self, settings: &AnalysisSettings) -> Result<()> {
        let event = ProjectStartEvent { settings };
        for plugin in self.participants(LifecycleHook::ProjectStart) {
            trace!(plugin = plugin.name(), "onProjectStart");
            plugin.on_project_start(&event).map_err(Error::Collaborator)?;
        }
        Ok(())
    }

    /// Let plugins attach project-level fields to `results`; returns the same handle.
    pub fn end<'r>(&self, results: &'r mut ProjectResult) -> Result<&'r mut ProjectResult> {
        for plugin in self.participants(LifecycleHook::ProjectEnd) {
            trace!(plugin = plugin.name(), "onProjectEnd");
            let mut event = ProjectEndEvent {
                results: &mut *results,
            };
            plugin.on_project_end(&mut event).map_err(Error::Collaborator)?;
        }
        Ok(results)
    }

    /// Registered plugin names in broadcast order.
    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    fn participants(&self, hook: LifecycleHook) -> impl Iterator<Item = &Box<dyn Plugin>> {
        self.plugins.iter().filter(move |p| p.implements(hook))
    }
}

impl Default for PluginPipeline {
    fn default() -> Self {
        Self::new(true, Vec::new())
    }
}

impl std::fmt::Debug for PluginPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginPipeline")
            .field("plugins", &self.plugin_names())
            .finish()
    }
}

fn default_plugins() -> Vec<Box<dyn Plugin>> {
    vec![Box::new(ProjectMetricsPlugin)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::HookPlugin;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn recording(name: &'static str, log: &Arc<Mutex<Vec<String>>>) -> Box<dyn Plugin> {
        let (l1, l2, l3) = (log.clone(), log.clone(), log.clone());
        Box::new(
            HookPlugin::new(name)
                .on_configure(move |_| {
                    l1.lock().push(format!("{name}:configure"));
                    Ok(())
                })
                .on_project_start(move |_| {
                    l2.lock().push(format!("{name}:start"));
                    Ok(())
                })
                .on_project_end(move |_| {
                    l3.lock().push(format!("{name}:end"));
                    Ok(())
                }),
        )
    }

    #[test]
    fn test_default_plugins_registered_first() {
        let pipeline = PluginPipeline::new(true, vec![Box::new(HookPlugin::new("user"))]);
        assert_eq!(pipeline.plugin_names(), vec!["project-metrics", "user"]);
    }

    #[test]
    fn test_no_default_plugins() {
        let pipeline = PluginPipeline::new(false, Vec::new());
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.len(), 0);
    }

    #[test]
    fn test_broadcast_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let pipeline =
            PluginPipeline::new(false, vec![recording("p1", &log), recording("p2", &log)]);

        let settings = pipeline.configure(&AnalysisOptions::new()).unwrap();
        pipeline.start(&settings).unwrap();
        let mut results = ProjectResult::default();
        pipeline.end(&mut results).unwrap();

        assert_eq!(
            *log.lock(),
            vec![
                "p1:configure",
                "p2:configure",
                "p1:start",
                "p2:start",
                "p1:end",
                "p2:end"
            ]
        );
    }

    #[test]
    fn test_configure_threads_settings_through_plugins() {
        let first = HookPlugin::new("first").on_configure(|event| {
            event.settings.extra.insert("seen".into(), 1.into());
            Ok(())
        });
        let second = HookPlugin::new("second").on_configure(|event| {
            let seen = event.settings.extra.get("seen").cloned();
            event.settings.extra.insert("copied".into(), seen.into());
            event.settings.skip_calculation = true;
            Ok(())
        });
        let pipeline = PluginPipeline::new(false, vec![Box::new(first), Box::new(second)]);

        let settings = pipeline.configure(&AnalysisOptions::new()).unwrap();
        assert!(settings.skip_calculation);
        assert_eq!(settings.extra["copied"], serde_json::json!(1));
    }

    #[test]
    fn test_hook_error_stops_broadcast_unmodified() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let failing =
            HookPlugin::new("failing").on_project_start(|_| anyhow::bail!("no accumulator"));
        let pipeline =
            PluginPipeline::new(false, vec![Box::new(failing), recording("after", &log)]);

        let err = pipeline.start(&AnalysisSettings::default()).unwrap_err();
        assert_eq!(err.to_string(), "no accumulator");
        assert_eq!(err.category(), "CollaboratorFailure");
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_end_returns_same_results() {
        let plugin = HookPlugin::new("tag").on_project_end(|event| {
            event.results.extensions.insert("tag".into(), "x".into());
            Ok(())
        });
        let pipeline = PluginPipeline::new(false, vec![Box::new(plugin)]);

        let mut results = ProjectResult::default();
        let returned: *const ProjectResult = pipeline.end(&mut results).unwrap();
        assert!(std::ptr::eq(returned, &results));
        assert_eq!(results.extensions["tag"], serde_json::json!("x"));
    }
}
