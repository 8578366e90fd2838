//! Plugin capability interface.
//!
//! A plugin declares which lifecycle hooks it implements through
//! [`Plugin::hooks`]; the pipeline only calls hooks listed there. Hook bodies
//! default to no-ops so an implementor writes only the hooks it declares.
//!
//! # Example
//!
//! ```rust
//! use project_complexity::pipeline::{ConfigureEvent, LifecycleHook, Plugin};
//!
//! struct Strict;
//!
//! impl Plugin for Strict {
//!     fn name(&self) -> &str {
//!         "strict"
//!     }
//!
//!     fn hooks(&self) -> &[LifecycleHook] {
//!         &[LifecycleHook::Configure]
//!     }
//!
//!     fn on_configure(&self, event: &mut ConfigureEvent<'_>) -> anyhow::Result<()> {
//!         event.settings.extra.insert("strict".into(), true.into());
//!         Ok(())
//!     }
//! }
//! ```

use crate::core::{AnalysisOptions, AnalysisSettings, ProjectResult};
use std::fmt;

/// Lifecycle hooks a plugin may implement, in the order they fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleHook {
    Configure,
    ProjectStart,
    ProjectEnd,
}

impl fmt::Display for LifecycleHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Configure => "onConfigure",
            Self::ProjectStart => "onProjectStart",
            Self::ProjectEnd => "onProjectEnd",
        };
        f.write_str(name)
    }
}

/// Payload of the configure phase. Plugins may mutate `settings` in place.
pub struct ConfigureEvent<'a> {
    pub options: &'a AnalysisOptions,
    pub settings: &'a mut AnalysisSettings,
}

/// Payload of the project-start phase.
pub struct ProjectStartEvent<'a> {
    pub settings: &'a AnalysisSettings,
}

/// Payload of the project-end phase. Plugins attach project-level fields to
/// `results` in place.
pub struct ProjectEndEvent<'a> {
    pub results: &'a mut ProjectResult,
}

/// A project-level plugin.
///
/// Hooks take `&self`: the registered plugin list is shared by every call on
/// its owning analyzer, so any per-call state a plugin keeps needs interior
/// mutability.
pub trait Plugin: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// The hooks this plugin implements.
    fn hooks(&self) -> &[LifecycleHook];

    fn on_configure(&self, _event: &mut ConfigureEvent<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    fn on_project_start(&self, _event: &ProjectStartEvent<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    fn on_project_end(&self, _event: &mut ProjectEndEvent<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    fn implements(&self, hook: LifecycleHook) -> bool {
        self.hooks().contains(&hook)
    }
}

type ConfigureFn = Box<dyn Fn(&mut ConfigureEvent<'_>) -> anyhow::Result<()> + Send + Sync>;
type ProjectStartFn = Box<dyn Fn(&ProjectStartEvent<'_>) -> anyhow::Result<()> + Send + Sync>;
type ProjectEndFn = Box<dyn Fn(&mut ProjectEndEvent<'_>) -> anyhow::Result<()> + Send + Sync>;

/// A plugin assembled from closures; each hook is present or absent.
///
/// # Example
///
/// ```rust
/// use project_complexity::pipeline::{HookPlugin, LifecycleHook, Plugin};
///
/// let plugin = HookPlugin::new("owner").on_project_end(|event| {
///     event.results.extensions.insert("owner".into(), "team-a".into());
///     Ok(())
/// });
/// assert_eq!(plugin.hooks(), &[LifecycleHook::ProjectEnd]);
/// ```
pub struct HookPlugin {
    name: String,
    hooks: Vec<LifecycleHook>,
    configure: Option<ConfigureFn>,
    project_start: Option<ProjectStartFn>,
    project_end: Option<ProjectEndFn>,
}

impl HookPlugin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hooks: Vec::new(),
            configure: None,
            project_start: None,
            project_end: None,
        }
    }

    pub fn on_configure<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut ConfigureEvent<'_>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.configure = Some(Box::new(f));
        self.declare(LifecycleHook::Configure)
    }

    pub fn on_project_start<F>(mut self, f: F) -> Self
    where
        F: Fn(&ProjectStartEvent<'_>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.project_start = Some(Box::new(f));
        self.declare(LifecycleHook::ProjectStart)
    }

    pub fn on_project_end<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut ProjectEndEvent<'_>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.project_end = Some(Box::new(f));
        self.declare(LifecycleHook::ProjectEnd)
    }

    fn declare(mut self, hook: LifecycleHook) -> Self {
        if !self.hooks.contains(&hook) {
            self.hooks.push(hook);
        }
        self
    }
}

impl Plugin for HookPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn hooks(&self) -> &[LifecycleHook] {
        &self.hooks
    }

    fn on_configure(&self, event: &mut ConfigureEvent<'_>) -> anyhow::Result<()> {
        match &self.configure {
            Some(f) => f(event),
            None => Ok(()),
        }
    }

    fn on_project_start(&self, event: &ProjectStartEvent<'_>) -> anyhow::Result<()> {
        match &self.project_start {
            Some(f) => f(event),
            None => Ok(()),
        }
    }

    fn on_project_end(&self, event: &mut ProjectEndEvent<'_>) -> anyhow::Result<()> {
        match &self.project_end {
            Some(f) => f(event),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for HookPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookPlugin")
            .field("name", &self.name)
            .field("hooks", &self.hooks)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_plugin_declares_only_present_hooks() {
        let plugin = HookPlugin::new("p")
            .on_project_end(|_| Ok(()))
            .on_configure(|_| Ok(()));

        assert_eq!(
            plugin.hooks(),
            &[LifecycleHook::ProjectEnd, LifecycleHook::Configure]
        );
        assert!(!plugin.implements(LifecycleHook::ProjectStart));
    }

    #[test]
    fn test_hook_plugin_replacing_a_hook_declares_once() {
        let plugin = HookPlugin::new("p")
            .on_configure(|_| Ok(()))
            .on_configure(|_| anyhow::bail!("second"));

        assert_eq!(plugin.hooks(), &[LifecycleHook::Configure]);

        let options = AnalysisOptions::new();
        let mut settings = AnalysisSettings::default();
        let mut event = ConfigureEvent {
            options: &options,
            settings: &mut settings,
        };
        let err = Plugin::on_configure(&plugin, &mut event).unwrap_err();
        assert_eq!(err.to_string(), "second");
    }

    #[test]
    fn test_hook_names_match_lifecycle_events() {
        assert_eq!(LifecycleHook::Configure.to_string(), "onConfigure");
        assert_eq!(LifecycleHook::ProjectStart.to_string(), "onProjectStart");
        assert_eq!(LifecycleHook::ProjectEnd.to_string(), "onProjectEnd");
    }
}
