//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration structures for the entropy dynamics model.
//! Defaults carry the parameter values from the working paper; everything
//! can be overridden through TOML.
//!
//! ## Example TOML
//!
//! ```toml
//! [params]
//! alpha = 1.0
//! delta = 0.8
//! beta = 1.5
//! gamma = 0.28
//! lambda_relax = 1.1
//! recognition_decay = 0.75
//! r_max = 1.0
//!
//! [grid]
//! start_year = 1950
//! horizon_decades = 8
//! steps_per_decade = 100
//!
//! [initial]
//! entropy_0 = 0.4
//! ```

use serde::{Deserialize, Serialize};

/// Coupling and sensitivity parameters of the model.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModelParams {
    /// Extraction sensitivity.
    pub alpha: f64,
    /// Volatility sensitivity.
    pub delta: f64,
    /// Stabilizing strength of the substrate.
    pub beta: f64,
    /// Compounding / self-reinforcement rate of entropy.
    pub gamma: f64,
    /// Relaxation rate toward the instantaneous equilibrium.
    pub lambda_relax: f64,
    /// Recognition decay strength.
    pub recognition_decay: f64,
    /// Maximum recognition coherence.
    pub r_max: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            delta: 0.8,
            beta: 1.5,
            gamma: 0.28,
            lambda_relax: 1.1,
            recognition_decay: 0.75,
            r_max: 1.0,
        }
    }
}

/// Time discretization of the integration.
///
/// Continuous time is measured in decades since `start_year`; each decade
/// is subdivided into `steps_per_decade` Euler steps.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub start_year: i32,
    pub horizon_decades: usize,
    pub steps_per_decade: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start_year: 1950,
            horizon_decades: 8,
            steps_per_decade: 100,
        }
    }
}

impl GridConfig {
    /// Euler step size in decades.
    #[must_use]
    pub fn dt(&self) -> f64 {
        1.0 / self.steps_per_decade as f64
    }

    /// Total number of Euler steps over the full horizon.
    #[must_use]
    pub fn total_steps(&self) -> u64 {
        (self.horizon_decades * self.steps_per_decade) as u64
    }

    /// Calendar year at continuous decade-time `t`.
    #[must_use]
    pub fn year_at(&self, t: f64) -> f64 {
        f64::from(self.start_year) + t * 10.0
    }
}

/// Seed values at the start of the integration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InitialConditions {
    /// Entropy at the start year.
    pub entropy_0: f64,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self { entropy_0: 0.4 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ModelConfig {
    pub params: ModelParams,
    pub grid: GridConfig,
    pub initial: InitialConditions,
}

impl ModelConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a
    /// description of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        // Parameter validation
        for (name, value) in [
            ("alpha", self.params.alpha),
            ("delta", self.params.delta),
            ("beta", self.params.beta),
            ("gamma", self.params.gamma),
            ("lambda_relax", self.params.lambda_relax),
            ("recognition_decay", self.params.recognition_decay),
            ("r_max", self.params.r_max),
        ] {
            anyhow::ensure!(value.is_finite(), "{} must be finite", name);
            anyhow::ensure!(value >= 0.0, "{} must be non-negative", name);
        }
        anyhow::ensure!(self.params.gamma <= 100.0, "gamma too large (max 100)");
        anyhow::ensure!(
            self.params.lambda_relax > 0.0,
            "lambda_relax must be positive"
        );
        anyhow::ensure!(self.params.r_max > 0.0, "r_max must be positive");

        // Grid validation
        anyhow::ensure!(
            self.grid.horizon_decades > 0,
            "Horizon must cover at least one decade"
        );
        anyhow::ensure!(
            self.grid.horizon_decades <= 1000,
            "Horizon too large (max 1000 decades)"
        );
        anyhow::ensure!(
            self.grid.steps_per_decade > 0,
            "Steps per decade must be positive"
        );
        anyhow::ensure!(
            self.grid.steps_per_decade <= 100_000,
            "Steps per decade too large (max 100000)"
        );

        // Initial condition validation
        anyhow::ensure!(
            self.initial.entropy_0.is_finite(),
            "Initial entropy must be finite"
        );
        anyhow::ensure!(
            self.initial.entropy_0 >= 0.0,
            "Initial entropy must be non-negative"
        );

        Ok(())
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Stable digest of the configuration, for run comparability.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.params).as_bytes());
        hasher.update(format!("{:?}", self.grid).as_bytes());
        hasher.update(format!("{:?}", self.initial).as_bytes());
        hex::encode(hasher.finalize())
    }
}
