//! Entropy forcing term.
//!
//! The drivers combine into a single forcing term
//! `D = alpha*X + delta*F - beta*S`; its exponential is the entropy level
//! the system would settle at if the drivers were frozen.

use crate::config::ModelParams;
use coherence_data::DriverSample;

/// Forcing term `D` under the given drivers.
#[must_use]
pub fn forcing_term(params: &ModelParams, drivers: &DriverSample) -> f64 {
    params.alpha * drivers.extraction + params.delta * drivers.volatility
        - params.beta * drivers.stability
}

/// Instantaneous equilibrium entropy `exp(D)`.
#[must_use]
pub fn equilibrium_entropy(params: &ModelParams, drivers: &DriverSample) -> f64 {
    forcing_term(params, drivers).exp()
}
