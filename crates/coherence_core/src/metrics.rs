//! Step metrics collection for the simulation.
//!
//! Provides structured logging and counters for monitoring integration
//! progress and run health.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// How often a progress line is emitted, in Euler steps.
const LOG_INTERVAL: u64 = 100;

/// Metrics collector for a simulation run.
pub struct Metrics {
    step_count: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step_count: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed Euler step.
    pub fn record_step(&self, year: f64, entropy: f64, recognition: f64) {
        self.step_count.fetch_add(1, Ordering::Relaxed);

        let step = self.step_count.load(Ordering::Relaxed);
        if step.is_multiple_of(LOG_INTERVAL) {
            tracing::debug!(
                step = step,
                year = year,
                entropy = entropy,
                recognition = recognition,
                "Integration step"
            );
        }
    }

    /// Gets the current step count.
    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.step_count.load(Ordering::Relaxed)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}
