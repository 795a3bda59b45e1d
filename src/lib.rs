//! Facade over the coherence workspace crates.
//!
//! Re-exports the data model and the integration engine so downstream code
//! and the integration tests can depend on a single crate.

pub use coherence_core::{config, engine, error, forcing, metrics, summary};
pub use coherence_core::{init_logging, Metrics, ModelConfig, ModelError, Simulation};
pub use coherence_data::{
    CoherenceState, DataError, DecadeRow, DriverSample, DriverSeries, RunSummary, Trajectory,
};
