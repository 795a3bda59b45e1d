use serde::{Deserialize, Serialize};

/// Tolerance used when comparing calendar years on the integration grid.
const YEAR_EPS: f64 = 1e-6;

/// One point on the simulation trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoherenceState {
    /// Continuous time in decades since the start year.
    pub t: f64,
    /// Calendar year corresponding to `t`.
    pub year: f64,
    /// Substrate stability `S(t)` in effect at this point.
    pub stability: f64,
    /// Extraction pressure `X(t)` in effect at this point.
    pub extraction: f64,
    /// Volatility `F(t)` in effect at this point.
    pub volatility: f64,
    /// Integrated cultural entropy `E(t)`.
    pub entropy: f64,
    /// Recognition coherence `R(t)`.
    pub recognition: f64,
}

/// Ordered, append-only sequence of [`CoherenceState`] records.
///
/// States are appended once per integration step and never mutated
/// afterwards; time strictly increases along the sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trajectory {
    states: Vec<CoherenceState>,
}

impl Trajectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            states: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, state: CoherenceState) {
        debug_assert!(
            self.states.last().map_or(true, |prev| state.t > prev.t),
            "trajectory time must strictly increase"
        );
        self.states.push(state);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn states(&self) -> &[CoherenceState] {
        &self.states
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CoherenceState> {
        self.states.iter()
    }

    #[must_use]
    pub fn first_state(&self) -> Option<&CoherenceState> {
        self.states.first()
    }

    #[must_use]
    pub fn final_state(&self) -> Option<&CoherenceState> {
        self.states.last()
    }

    /// Sub-trajectory restricted to calendar years in `[from_year, to_year]`.
    #[must_use]
    pub fn between_years(&self, from_year: f64, to_year: f64) -> Trajectory {
        Trajectory {
            states: self
                .states
                .iter()
                .filter(|s| {
                    s.year >= from_year - YEAR_EPS && s.year <= to_year + YEAR_EPS
                })
                .copied()
                .collect(),
        }
    }

    /// Samples the trajectory at a fixed year interval, starting from the
    /// first recorded year. Each sample is the grid point nearest to the
    /// target year, so the result is exact on grids whose resolution
    /// divides the interval.
    #[must_use]
    pub fn sample_every_years(&self, interval_years: f64) -> Vec<CoherenceState> {
        let (Some(first), Some(last)) = (self.first_state(), self.final_state()) else {
            return Vec::new();
        };
        assert!(
            interval_years > 0.0,
            "sampling interval must be positive, got {interval_years}"
        );

        let mut samples = Vec::new();
        let mut cursor = 0;
        let mut target = first.year;
        while target <= last.year + YEAR_EPS {
            while cursor + 1 < self.states.len()
                && (self.states[cursor + 1].year - target).abs()
                    < (self.states[cursor].year - target).abs()
            {
                cursor += 1;
            }
            samples.push(self.states[cursor]);
            target += interval_years;
        }
        samples
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a CoherenceState;
    type IntoIter = std::slice::Iter<'a, CoherenceState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
