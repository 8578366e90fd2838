//! Default project metrics plugin.
//!
//! Computes aggregate statistics over the module reports. Dependency-graph
//! figures are left to dedicated plugins; the `noCoreSize` option is only
//! normalized into the settings so those plugins can read it.

use super::plugin::{ConfigureEvent, LifecycleHook, Plugin, ProjectEndEvent};
use crate::core::{FunctionReport, ModuleAggregate, ModuleReport, ProjectMetrics};

/// Option (and settings) key disabling core-size computation.
pub const NO_CORE_SIZE: &str = "noCoreSize";

#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectMetricsPlugin;

impl Plugin for ProjectMetricsPlugin {
    fn name(&self) -> &str {
        "project-metrics"
    }

    fn hooks(&self) -> &[LifecycleHook] {
        &[LifecycleHook::Configure, LifecycleHook::ProjectEnd]
    }

    fn on_configure(&self, event: &mut ConfigureEvent<'_>) -> anyhow::Result<()> {
        let no_core_size = event.options.get_bool(NO_CORE_SIZE).unwrap_or(false);
        event
            .settings
            .extra
            .insert(NO_CORE_SIZE.to_string(), no_core_size.into());
        Ok(())
    }

    fn on_project_end(&self, event: &mut ProjectEndEvent<'_>) -> anyhow::Result<()> {
        event.results.metrics = Some(compute_project_metrics(&event.results.reports));
        Ok(())
    }
}

/// Aggregate statistics for a set of module reports (pure).
///
/// Each figure is a per-function mean: a module contributes the mean over its
/// functions, or its module aggregate when it has none, and those values are
/// averaged across modules. Every mean is 0.0 for an empty project.
pub fn compute_project_metrics(reports: &[ModuleReport]) -> ProjectMetrics {
    ProjectMetrics {
        module_count: reports.len(),
        function_count: reports.iter().map(|r| r.functions.len()).sum(),
        dependency_count: reports.iter().map(|r| r.dependencies.len()).sum(),
        loc: project_mean(reports, |a| a.sloc.logical, |f| f.sloc.logical),
        cyclomatic: project_mean(reports, |a| a.cyclomatic, |f| f.cyclomatic),
        cognitive: project_mean(reports, |a| a.cognitive, |f| f.cognitive),
        params: project_mean(reports, |a| a.params, |f| f.params),
        max_nesting: project_mean(reports, |a| a.max_nesting, |f| f.max_nesting),
    }
}

fn project_mean(
    reports: &[ModuleReport],
    aggregate: impl Fn(&ModuleAggregate) -> u32,
    function: impl Fn(&FunctionReport) -> u32,
) -> f64 {
    mean(reports.iter().map(|report| {
        if report.functions.is_empty() {
            f64::from(aggregate(&report.aggregate))
        } else {
            mean(report.functions.iter().map(|f| f64::from(function(f))))
        }
    }))
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}
