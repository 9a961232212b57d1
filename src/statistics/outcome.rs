//! Distribution of raw outcomes.

use super::{
    descriptive::{mean, percentile_sorted, round_to, std_dev},
    StatSummary, StatsError,
};
use serde::{Deserialize, Serialize};

/// Distribution statistics over every outcome of a sequence.
///
/// Values are kept at full precision; [`OutcomeStats::summary`] applies the
/// presentation rounding (4 decimals for mean, median and standard
/// deviation, 2 for extremes and percentiles).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeStats {
    /// Number of outcomes.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (equal to `p50`).
    pub median: f64,
    /// Largest outcome.
    pub max: f64,
    /// Smallest outcome.
    pub min: f64,
    /// 25th percentile.
    pub p25: f64,
    /// 50th percentile.
    pub p50: f64,
    /// 75th percentile.
    pub p75: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl OutcomeStats {
    /// Computes statistics over `values`.
    ///
    /// Fails with [`StatsError::EmptyInput`] when there are no values.
    pub fn compute(values: &[f64]) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::EmptyInput);
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let p50 = percentile_sorted(&sorted, 50.0);

        Ok(Self {
            count: values.len(),
            mean: mean(values),
            median: p50,
            max: sorted[sorted.len() - 1],
            min: sorted[0],
            p25: percentile_sorted(&sorted, 25.0),
            p50,
            p75: percentile_sorted(&sorted, 75.0),
            std_dev: std_dev(values),
        })
    }

    /// Returns the rounded named metrics.
    pub fn summary(&self) -> StatSummary {
        StatSummary::new()
            .with("Average Multiplier", round_to(self.mean, 4))
            .with("Median Multiplier", round_to(self.median, 4))
            .with("Max Multiplier", round_to(self.max, 2))
            .with("Min Multiplier", round_to(self.min, 2))
            .with("25th Percentile", round_to(self.p25, 2))
            .with("50th Percentile", round_to(self.p50, 2))
            .with("75th Percentile", round_to(self.p75, 2))
            .with("Standard Deviation", round_to(self.std_dev, 4))
    }
}
