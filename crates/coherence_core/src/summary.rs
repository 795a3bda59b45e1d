//! Decade-level summary derivation.
//!
//! Collapses a dense trajectory into one row per simulated decade, taken at
//! the grid point nearest each decade start, together with the static
//! equilibrium entropy the decade's drivers would impose on their own.

use crate::config::ModelConfig;
use crate::forcing;
use coherence_data::{DecadeRow, DriverSeries, RunSummary, Trajectory};

/// Builds the per-decade summary of a run.
///
/// Produces exactly `horizon_decades` rows with years ascending by ten.
/// Returns an empty summary for an empty trajectory.
#[must_use]
pub fn decade_summary(
    trajectory: &Trajectory,
    config: &ModelConfig,
    drivers: &DriverSeries,
) -> RunSummary {
    if trajectory.is_empty() {
        return RunSummary::default();
    }

    let states = trajectory.states();
    let mut rows = Vec::with_capacity(config.grid.horizon_decades);
    let mut cursor = 0;
    for decade in 0..config.grid.horizon_decades {
        let target = decade as f64;
        while cursor + 1 < states.len()
            && (states[cursor + 1].t - target).abs() < (states[cursor].t - target).abs()
        {
            cursor += 1;
        }
        let state = &states[cursor];
        let year = config.grid.start_year + (decade as i32) * 10;
        rows.push(DecadeRow {
            label: format!("{year}s"),
            year,
            entropy: state.entropy,
            recognition: state.recognition,
            equilibrium_entropy: forcing::equilibrium_entropy(
                &config.params,
                &drivers.at(target),
            ),
        });
    }
    RunSummary::new(rows)
}
