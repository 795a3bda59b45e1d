use serde::{Deserialize, Serialize};

/// Decade-level view of the simulation, one row per simulated decade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecadeRow {
    /// Decade label, e.g. `"1950s"`.
    pub label: String,
    /// Calendar year the decade opens with.
    pub year: i32,
    /// Integrated entropy `E` at the decade start.
    pub entropy: f64,
    /// Recognition coherence `R` at the decade start.
    pub recognition: f64,
    /// Static equilibrium entropy `exp(D)` under the decade's drivers,
    /// for comparison against the dynamic value.
    pub equilibrium_entropy: f64,
}

/// Ordered collection of [`DecadeRow`] records derived from a trajectory.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    rows: Vec<DecadeRow>,
}

impl RunSummary {
    #[must_use]
    pub fn new(rows: Vec<DecadeRow>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[DecadeRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DecadeRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a RunSummary {
    type Item = &'a DecadeRow;
    type IntoIter = std::slice::Iter<'a, DecadeRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
