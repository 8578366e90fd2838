//! Fluent construction of a [`PluginPipeline`].

use super::lifecycle::PluginPipeline;
use super::plugin::Plugin;

/// Builder for a plugin pipeline.
///
/// Registration order is the order of `plugin` calls, after the default
/// plugins.
///
/// # Example
///
/// ```rust
/// use project_complexity::pipeline::{HookPlugin, PluginPipelineBuilder};
///
/// let pipeline = PluginPipelineBuilder::new()
///     .without_default_plugins()
///     .plugin(HookPlugin::new("graph"))
///     .when(true, |b| b.plugin(HookPlugin::new("graph-metrics")))
///     .build();
/// assert_eq!(pipeline.plugin_names(), vec!["graph", "graph-metrics"]);
/// ```
pub struct PluginPipelineBuilder {
    load_default_plugins: bool,
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginPipelineBuilder {
    pub fn new() -> Self {
        Self {
            load_default_plugins: true,
            plugins: Vec::new(),
        }
    }

    pub fn load_default_plugins(mut self, load: bool) -> Self {
        self.load_default_plugins = load;
        self
    }

    pub fn without_default_plugins(self) -> Self {
        self.load_default_plugins(false)
    }

    /// Append a plugin.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Append already-boxed plugins, keeping their order.
    pub fn plugins(mut self, plugins: impl IntoIterator<Item = Box<dyn Plugin>>) -> Self {
        self.plugins.extend(plugins);
        self
    }

    /// Apply `f` only when `condition` holds.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition {
            f(self)
        } else {
            self
        }
    }

    pub fn build(self) -> PluginPipeline {
        PluginPipeline::new(self.load_default_plugins, self.plugins)
    }
}

impl Default for PluginPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
