use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub use crate::logging::is_observability_enabled;

/// Install the Prometheus recorder.
///
/// Returns None if observability is disabled or a recorder is already
/// installed.
pub fn init_metrics() -> Option<PrometheusHandle> {
    if !is_observability_enabled() {
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install Prometheus recorder");
            None
        }
    }
}

/// Render the current metrics in Prometheus text format.
pub fn render_metrics(handle: &PrometheusHandle) -> String {
    handle.run_upkeep();
    handle.render()
}

// Business metrics helpers

/// Count a create/update/delete on a hierarchy node.
pub fn track_hierarchy_mutation(entity: &'static str, operation: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("hierarchy_mutations_total", "entity" => entity, "operation" => operation)
        .increment(1);
}

/// Record a full regeneration of the derived class list.
pub fn track_regeneration(class_count: usize) {
    if !is_observability_enabled() {
        return;
    }
    counter!("derived_classes_regenerated_total").increment(1);
    gauge!("derived_classes_current").set(class_count as f64);
}

pub fn track_cascade_analysis(kind: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("cascade_analyses_total", "kind" => kind).increment(1);
}
