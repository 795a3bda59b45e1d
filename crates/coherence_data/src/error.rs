//! Error types for the data layer.

use thiserror::Error;

/// Validation errors for driver tables and trajectory inputs.
#[derive(Error, Debug)]
pub enum DataError {
    /// A driver table contains no decades.
    #[error("driver series is empty")]
    EmptyDrivers,

    /// The three driver tables disagree on decade count.
    #[error("driver series length mismatch: stability {stability}, extraction {extraction}, volatility {volatility}")]
    LengthMismatch {
        stability: usize,
        extraction: usize,
        volatility: usize,
    },

    /// A driver value is non-finite or outside the accepted range.
    #[error("driver value out of range at decade index {decade}: {name} = {value}")]
    DriverOutOfRange {
        decade: usize,
        name: &'static str,
        value: f64,
    },
}

/// Result type alias for data-layer validation.
pub type Result<T> = std::result::Result<T, DataError>;
