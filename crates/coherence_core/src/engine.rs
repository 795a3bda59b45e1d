//! Forward-Euler integration engine.
//!
//! [`Simulation`] owns the configuration, the exogenous driver tables, and
//! the current state. Each Euler step evaluates the forcing term under the
//! drivers in effect, relaxes entropy toward its instantaneous equilibrium
//! while compounding the existing level, and derives recognition coherence
//! from the new entropy:
//!
//! ```text
//! D      = alpha*X + delta*F - beta*S
//! E_inst = exp(D)
//! dE/dt  = gamma*E + lambda_relax*(E_inst - E)
//! R      = r_max * exp(-k*E)
//! ```
//!
//! Runs are deterministic: identical configuration and drivers produce
//! bitwise-identical trajectories.

use crate::config::ModelConfig;
use crate::error::ModelError;
use crate::forcing;
use crate::metrics::Metrics;
use coherence_data::{CoherenceState, DriverSeries, Trajectory};

pub struct Simulation {
    config: ModelConfig,
    drivers: DriverSeries,
    state: CoherenceState,
    steps_taken: u64,
    metrics: Metrics,
}

impl Simulation {
    /// Creates a simulation positioned at the start year.
    ///
    /// Validates both the configuration and the driver tables.
    pub fn new(config: ModelConfig, drivers: DriverSeries) -> Result<Self, ModelError> {
        config.validate().map_err(ModelError::Config)?;
        drivers.validate()?;

        let opening = drivers.at(0.0);
        let entropy = config.initial.entropy_0;
        let recognition =
            config.params.r_max * (-config.params.recognition_decay * entropy).exp();
        let state = CoherenceState {
            t: 0.0,
            year: config.grid.year_at(0.0),
            stability: opening.stability,
            extraction: opening.extraction,
            volatility: opening.volatility,
            entropy,
            recognition,
        };

        Ok(Self {
            config,
            drivers,
            state,
            steps_taken: 0,
            metrics: Metrics::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    #[must_use]
    pub fn drivers(&self) -> &DriverSeries {
        &self.drivers
    }

    /// Current state, the initial state until [`step`](Self::step) is called.
    #[must_use]
    pub fn state(&self) -> &CoherenceState {
        &self.state
    }

    #[must_use]
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Whether the configured horizon has been fully integrated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.steps_taken >= self.config.grid.total_steps()
    }

    /// Advances one Euler step and returns the new state.
    ///
    /// Fails with [`ModelError::NonFinite`] if the update produces NaN or
    /// an infinity, leaving the previous state untouched.
    pub fn step(&mut self) -> Result<CoherenceState, ModelError> {
        let params = &self.config.params;
        let dt = self.config.grid.dt();
        let step = self.steps_taken + 1;
        let t = step as f64 * dt;
        let year = self.config.grid.year_at(t);

        let sample = self.drivers.at(t);
        let e_inst = forcing::equilibrium_entropy(params, &sample);
        let de_dt =
            params.gamma * self.state.entropy + params.lambda_relax * (e_inst - self.state.entropy);
        let entropy = self.state.entropy + de_dt * dt;
        if !entropy.is_finite() {
            return Err(ModelError::non_finite("entropy", step, year));
        }

        let recognition = params.r_max * (-params.recognition_decay * entropy).exp();
        if !recognition.is_finite() {
            return Err(ModelError::non_finite("recognition", step, year));
        }

        self.state = CoherenceState {
            t,
            year,
            stability: sample.stability,
            extraction: sample.extraction,
            volatility: sample.volatility,
            entropy,
            recognition,
        };
        self.steps_taken = step;
        self.metrics.record_step(year, entropy, recognition);
        Ok(self.state)
    }

    /// Integrates the full horizon and returns the dense trajectory,
    /// initial state included.
    pub fn run(mut self) -> Result<Trajectory, ModelError> {
        let total = self.config.grid.total_steps();
        let mut trajectory = Trajectory::with_capacity(total as usize + 1);
        trajectory.push(self.state);
        for _ in 0..total {
            trajectory.push(self.step()?);
        }

        tracing::info!(
            steps = total,
            final_year = self.state.year,
            final_entropy = self.state.entropy,
            final_recognition = self.state.recognition,
            elapsed_ms = self.metrics.elapsed().as_millis() as u64,
            "Simulation complete"
        );
        Ok(trajectory)
    }
}
