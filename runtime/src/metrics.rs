//! Prometheus metrics for store observability.
//!
//! The [`Store`](crate::Store) records its metrics through the `metrics`
//! facade, so they cost nothing until a recorder is installed. This module
//! installs a Prometheus recorder and renders the exposition text on demand;
//! no HTTP listener is started.
//!
//! # Example
//!
//! ```rust,no_run
//! use todostore_runtime::metrics::MetricsRecorder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut recorder = MetricsRecorder::new();
//! recorder.install()?;
//!
//! // ... dispatch some actions ...
//!
//! if let Some(text) = recorder.render() {
//!     println!("{text}");
//! }
//! # Ok(())
//! # }
//! ```

use metrics::{describe_counter, describe_gauge, describe_histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;
use thiserror::Error;

// Re-export metrics macros for use in other crates
pub use metrics::{counter, gauge, histogram};

/// Counter of actions dispatched through a store, labelled by `kind`.
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// Histogram of reducer execution time.
pub const REDUCER_DURATION_SECONDS: &str = "store.reducer.duration_seconds";

/// Gauge of live subscriptions on a store.
pub const SUBSCRIBERS: &str = "store.subscribers";

/// Errors from metrics operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to build metrics exporter
    #[error("Failed to build metrics exporter: {0}")]
    Build(String),
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter: {0}")]
    Install(String),
}

/// Process-wide Prometheus recorder.
///
/// Holds the handle used to render the current metric values.
#[derive(Default)]
pub struct MetricsRecorder {
    handle: Option<PrometheusHandle>,
}

impl MetricsRecorder {
    /// Create a recorder that has not been installed yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }

    /// Describe all store metrics and install the Prometheus recorder globally.
    ///
    /// # Errors
    ///
    /// Returns error if the exporter cannot be built or installed.
    ///
    /// # Note
    ///
    /// Only one global recorder can exist per process. If another recorder is
    /// already installed, this logs a warning and leaves the handle unset.
    pub fn install(&mut self) -> Result<(), MetricsError> {
        let builder = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Suffix("duration_seconds".to_string()),
                &[
                    0.000_001, 0.000_005, 0.000_01, 0.000_05, 0.000_1, 0.000_5, 0.001, 0.01,
                ],
            )
            .map_err(|e| MetricsError::Build(e.to_string()))?;

        match builder.install_recorder() {
            Ok(handle) => {
                register_metrics();
                self.handle = Some(handle);
                tracing::info!("Metrics recorder installed");
                Ok(())
            }
            Err(e) => {
                let err_msg = e.to_string();
                if err_msg.contains("already initialized") {
                    tracing::warn!("Metrics recorder already initialized, skipping re-initialization");
                    Ok(())
                } else {
                    Err(MetricsError::Install(err_msg))
                }
            }
        }
    }

    /// Whether this recorder owns an installed Prometheus handle.
    #[must_use]
    pub const fn is_installed(&self) -> bool {
        self.handle.is_some()
    }

    /// Render current metrics in Prometheus text format.
    ///
    /// Returns `None` if the recorder hasn't been installed.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        self.handle.as_ref().map(PrometheusHandle::render)
    }
}

/// Record one processed action.
pub(crate) fn record_dispatch(kind: &'static str, elapsed: Duration) {
    counter!(ACTIONS_TOTAL, "kind" => kind).increment(1);
    histogram!(REDUCER_DURATION_SECONDS).record(elapsed.as_secs_f64());
}

/// Record the current number of subscriptions.
pub(crate) fn record_subscribers(count: usize) {
    // Precision loss is irrelevant for subscriber counts
    #[allow(clippy::cast_precision_loss)]
    gauge!(SUBSCRIBERS).set(count as f64);
}

/// Register all metric descriptions.
fn register_metrics() {
    describe_counter!(ACTIONS_TOTAL, "Total number of actions dispatched to stores");
    describe_histogram!(REDUCER_DURATION_SECONDS, "Time taken to run the reducer");
    describe_gauge!(SUBSCRIBERS, "Number of live store subscriptions");
}
