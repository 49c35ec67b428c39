//! Classtree Observability Module
//!
//! Provides configurable observability features:
//! - Structured logging via `tracing` (console, optional rolling log files)
//! - Business metrics via `metrics` with a Prometheus text recorder
//!
//! This module can be enabled or disabled at compile time via the `observability` feature flag.
//! At runtime, observability can be further controlled via the `OBSERVABILITY_ENABLED` environment variable.
//!
//! # Features
//!
//! - `observability` (default): Enables file logging and metrics
//!
//! Without the feature, [`init_tracing`] falls back to console-only logging and
//! every metrics helper is a no-op.
//!
//! # Examples
//!
//! ```no_run
//! use classtree_config::LoggingConfig;
//! use classtree_observability::init_tracing;
//!
//! let _guard = init_tracing(&LoggingConfig::from_env());
//! // ... application code ...
//! ```

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

// Re-export handle type when observability is enabled
#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle as MetricsHandle;

// Public exports when observability is enabled
#[cfg(feature = "observability")]
pub use crate::logging::{LoggingGuard, init_tracing, is_observability_enabled};
#[cfg(feature = "observability")]
pub use crate::metrics::{
    init_metrics, render_metrics, track_cascade_analysis, track_hierarchy_mutation,
    track_regeneration,
};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use classtree_config::LoggingConfig;

    /// No-op observability check when feature disabled
    pub fn is_observability_enabled() -> bool {
        false
    }

    /// Placeholder guard; there is no file writer to keep alive.
    pub struct LoggingGuard;

    /// Console logging only when feature disabled
    pub fn init_tracing(config: &LoggingConfig) -> LoggingGuard {
        crate::basic_logging::init_basic_console_logging(config);
        LoggingGuard
    }

    /// Placeholder handle; never constructed.
    pub struct MetricsHandle;

    /// No-op metrics initialization when feature disabled
    pub fn init_metrics() -> Option<MetricsHandle> {
        None
    }

    pub fn render_metrics(_handle: &MetricsHandle) -> String {
        String::new()
    }

    // No-op tracking functions
    pub fn track_hierarchy_mutation(_entity: &'static str, _operation: &'static str) {}
    pub fn track_regeneration(_class_count: usize) {}
    pub fn track_cascade_analysis(_kind: &'static str) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
