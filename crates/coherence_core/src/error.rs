//! Error types for simulation runs.

use coherence_data::DataError;
use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    Config(#[source] anyhow::Error),

    /// Driver table rejected by validation.
    #[error(transparent)]
    Drivers(#[from] DataError),

    /// The integration produced a non-finite value.
    #[error("non-finite {variable} at step {step} (year {year:.1})")]
    NonFinite {
        variable: &'static str,
        step: u64,
        year: f64,
    },
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, ModelError>;

impl ModelError {
    #[must_use]
    pub fn non_finite(variable: &'static str, step: u64, year: f64) -> Self {
        Self::NonFinite {
            variable,
            step,
            year,
        }
    }
}
