//! Plugin lifecycle: configure, start and end, broadcast in registration order.

pub mod builder;
pub mod lifecycle;
pub mod metrics;
pub mod plugin;

pub use builder::PluginPipelineBuilder;
pub use lifecycle::PluginPipeline;
pub use metrics::{compute_project_metrics, ProjectMetricsPlugin, NO_CORE_SIZE};
pub use plugin::{
    ConfigureEvent, HookPlugin, LifecycleHook, Plugin, ProjectEndEvent, ProjectStartEvent,
};
