use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single (period, value) observation for one station and one sub-metric.
///
/// Periods are opaque strings ("2015-01", "2015", "2015-01-31") and are
/// ordered by plain string comparison. Integer-typed source columns are
/// widened to `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub periodo: String,
    pub valor: f64,
}

impl Observation {
    pub fn new(periodo: impl Into<String>, valor: f64) -> Self {
        Self {
            periodo: periodo.into(),
            valor,
        }
    }

    /// Returns true when the observations are strictly ordered by period.
    pub fn is_ordered(observations: &[Observation]) -> bool {
        observations
            .windows(2)
            .all(|w| w[0].periodo.cmp(&w[1].periodo) == Ordering::Less)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_series_detected() {
        let series = vec![
            Observation::new("2015-01", 1.0),
            Observation::new("2015-02", 2.0),
            Observation::new("2016-01", 3.0),
        ];
        assert!(Observation::is_ordered(&series));
    }

    #[test]
    fn duplicate_or_unordered_periods_rejected() {
        let series = vec![Observation::new("2015-02", 1.0), Observation::new("2015-01", 2.0)];
        assert!(!Observation::is_ordered(&series));
        let series = vec![Observation::new("2015", 1.0), Observation::new("2015", 2.0)];
        assert!(!Observation::is_ordered(&series));
    }

    #[test]
    fn empty_and_single_are_ordered() {
        assert!(Observation::is_ordered(&[]));
        assert!(Observation::is_ordered(&[Observation::new("2015", 1.0)]));
    }
}
