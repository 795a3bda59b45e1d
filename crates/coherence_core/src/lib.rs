//! # Coherence Core
//!
//! The simulation engine for the cultural entropy dynamics model: five
//! coupled scalar observables (substrate stability, extraction pressure,
//! volatility, cultural entropy, recognition coherence) evolved over
//! decade-scale time.
//!
//! This crate contains the deterministic integration logic, including:
//! - Strongly-typed model configuration with paper-value defaults
//! - The entropy forcing term and its equilibrium value
//! - A forward-Euler engine producing dense trajectories
//! - Decade-level summaries derived from the dense grid
//! - Metrics collection and structured logging
//!
//! ## Example
//!
//! ```
//! use coherence_core::config::ModelConfig;
//! use coherence_core::engine::Simulation;
//! use coherence_data::DriverSeries;
//!
//! let sim = Simulation::new(ModelConfig::default(), DriverSeries::baseline()).unwrap();
//! let trajectory = sim.run().unwrap();
//! assert_eq!(trajectory.len(), 801);
//! ```

/// Configuration for model parameters, integration grid, and seeds
pub mod config;
/// Euler integration engine producing dense trajectories
pub mod engine;
/// Error taxonomy for simulation runs
pub mod error;
/// Entropy forcing term and equilibrium entropy
pub mod forcing;
/// Step metrics collection and logging
pub mod metrics;
/// Decade-level summary derivation
pub mod summary;

pub use config::ModelConfig;
pub use engine::Simulation;
pub use error::ModelError;
pub use metrics::{init_logging, Metrics};
pub use summary::decade_summary;
