use crate::error::DataError;
use serde::{Deserialize, Serialize};

/// Upper bound accepted for a driver value. The baseline tables are
/// normalized to [0, 1]; a little headroom is left for scenario work.
const DRIVER_MAX: f64 = 1.5;

/// The three exogenous drivers evaluated at a single point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriverSample {
    /// Substrate stability `S(t)`.
    pub stability: f64,
    /// Extraction pressure `X(t)`.
    pub extraction: f64,
    /// Volatility / fragmentation `F(t)`.
    pub volatility: f64,
}

/// Per-decade driver tables, piecewise-constant over each decade.
///
/// Index 0 is the first simulated decade. Continuous decade-time maps onto
/// the tables by flooring, clamped to the final decade so integration past
/// the last tabulated decade holds the terminal values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverSeries {
    /// Substrate stability per decade, normalized.
    pub stability: Vec<f64>,
    /// Extraction pressure per decade, normalized.
    pub extraction: Vec<f64>,
    /// Volatility / fragmentation per decade, normalized.
    pub volatility: Vec<f64>,
}

impl DriverSeries {
    /// Decadal estimates for the 1950s through the 2020s.
    #[must_use]
    pub fn baseline() -> Self {
        Self {
            stability: vec![0.85, 0.65, 0.45, 0.55, 0.40, 0.35, 0.25, 0.30],
            extraction: vec![0.15, 0.45, 0.70, 0.80, 0.85, 0.90, 0.95, 0.95],
            volatility: vec![0.20, 0.50, 0.65, 0.75, 0.85, 0.90, 0.95, 1.00],
        }
    }

    /// Number of tabulated decades.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stability.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stability.is_empty()
    }

    /// Checks table shape and value ranges.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.stability.is_empty() {
            return Err(DataError::EmptyDrivers);
        }
        if self.extraction.len() != self.stability.len()
            || self.volatility.len() != self.stability.len()
        {
            return Err(DataError::LengthMismatch {
                stability: self.stability.len(),
                extraction: self.extraction.len(),
                volatility: self.volatility.len(),
            });
        }
        for (name, table) in [
            ("stability", &self.stability),
            ("extraction", &self.extraction),
            ("volatility", &self.volatility),
        ] {
            for (decade, &value) in table.iter().enumerate() {
                if !value.is_finite() || !(0.0..=DRIVER_MAX).contains(&value) {
                    return Err(DataError::DriverOutOfRange {
                        decade,
                        name,
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    /// Piecewise-constant lookup at continuous decade-time `t`.
    ///
    /// `t` is measured in decades since the first tabulated decade.
    /// Negative times clamp to the first decade, times beyond the table to
    /// the last.
    #[must_use]
    pub fn at(&self, t: f64) -> DriverSample {
        let idx = (t.floor().max(0.0) as usize).min(self.len().saturating_sub(1));
        DriverSample {
            stability: self.stability[idx],
            extraction: self.extraction[idx],
            volatility: self.volatility[idx],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_validates() {
        let drivers = DriverSeries::baseline();
        assert!(drivers.validate().is_ok());
        assert_eq!(drivers.len(), 8);
    }

    #[test]
    fn test_lookup_is_piecewise_constant() {
        let drivers = DriverSeries::baseline();
        let start = drivers.at(0.0);
        let mid = drivers.at(0.99);
        assert_eq!(start, mid);
        assert_eq!(start.stability, 0.85);

        let next = drivers.at(1.0);
        assert_eq!(next.stability, 0.65);
    }

    #[test]
    fn test_lookup_clamps_past_table_end() {
        let drivers = DriverSeries::baseline();
        let last = drivers.at(7.0);
        assert_eq!(drivers.at(7.5), last);
        assert_eq!(drivers.at(100.0), last);
        assert_eq!(drivers.at(-1.0), drivers.at(0.0));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let mut drivers = DriverSeries::baseline();
        drivers.volatility.pop();
        assert!(matches!(
            drivers.validate(),
            Err(DataError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let mut drivers = DriverSeries::baseline();
        drivers.extraction[2] = f64::NAN;
        assert!(matches!(
            drivers.validate(),
            Err(DataError::DriverOutOfRange { decade: 2, .. })
        ));
    }

    #[test]
    fn test_empty_rejected() {
        let drivers = DriverSeries {
            stability: vec![],
            extraction: vec![],
            volatility: vec![],
        };
        assert!(matches!(drivers.validate(), Err(DataError::EmptyDrivers)));
    }
}
