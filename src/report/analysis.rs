//! End-to-end analysis of an outcome sequence.

use crate::config::{AnalysisConfig, ConfigError};
use crate::detection::{detect, Streak, StreakGroups};
use crate::ranking::{select_top, RankedStreak};
use crate::statistics::{
    gaps_by_length, FrequencyTable, GapStats, LengthGapTable, OutcomeStats, StatsError,
    StreakLengthStats,
};
use serde::{Deserialize, Serialize};

/// Errors that can occur while analyzing a sequence.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalysisError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ConfigError),
    #[error("invalid outcome {value} at index {index} (must be finite and non-negative)")]
    InvalidOutcome { index: usize, value: f64 },
}

/// Result of one analysis run.
///
/// Built once by [`analyze`] and never modified. Streaks carry their own
/// values and refer to the source sequence only through start indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Number of outcomes analyzed.
    pub sequence_len: usize,
    /// Parameters the report was produced with.
    pub config: AnalysisConfig,
    /// Every streak, in start-index order.
    pub streaks: Vec<Streak>,
    /// The longest streaks, in start-index order.
    pub top_streaks: Vec<RankedStreak>,
    /// Outcome distribution; `None` for an empty sequence.
    pub outcome_stats: Option<OutcomeStats>,
    /// Streak length statistics.
    pub streak_stats: StreakLengthStats,
    /// Gaps between consecutive top streaks.
    pub gap_stats: GapStats,
    /// Gaps between consecutive streaks of each length.
    pub gaps_by_length: LengthGapTable,
    /// Frequency of each reported streak length.
    pub frequency: FrequencyTable,
}

impl AnalysisReport {
    /// Returns every streak of exactly `length`, in start-index order.
    pub fn streaks_of_length(&self, length: usize) -> Vec<&Streak> {
        self.streaks.iter().filter(|s| s.length() == length).collect()
    }

    /// Returns the occurring streak lengths that are at least
    /// `min_reported_length`, ascending.
    pub fn reported_lengths(&self) -> Vec<usize> {
        StreakGroups::from_streaks(&self.streaks)
            .iter()
            .map(|(length, _)| length)
            .filter(|&length| length >= self.config.min_reported_length)
            .collect()
    }

    /// Returns true if no streaks were found.
    pub fn is_empty(&self) -> bool {
        self.streaks.is_empty()
    }
}

/// Analyzes `sequence` with the given parameters.
///
/// An empty sequence is valid and yields a report with no streaks, no
/// outcome statistics and empty gap statistics.
pub fn analyze(sequence: &[f64], config: &AnalysisConfig) -> Result<AnalysisReport, AnalysisError> {
    config.validate()?;
    if let Some((index, &value)) = sequence
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v < 0.0)
    {
        return Err(AnalysisError::InvalidOutcome { index, value });
    }

    let streaks = detect(sequence, config.threshold);
    let top_streaks = select_top(&streaks, config.top_n);

    let outcome_stats = match OutcomeStats::compute(sequence) {
        Ok(stats) => Some(stats),
        Err(StatsError::EmptyInput) => None,
    };
    let streak_stats = StreakLengthStats::compute(&streaks);
    let gap_stats = GapStats::compute(top_streaks.iter().map(|r| &r.streak));
    let gaps_by_length = gaps_by_length(&streaks);
    let frequency = FrequencyTable::compute(&streaks, config.min_reported_length);

    tracing::info!(
        outcomes = sequence.len(),
        streaks = streaks.len(),
        top = top_streaks.len(),
        longest = ?streak_stats.max_length,
        "Analysis complete"
    );

    Ok(AnalysisReport {
        sequence_len: sequence.len(),
        config: config.clone(),
        streaks,
        top_streaks,
        outcome_stats,
        streak_stats,
        gap_stats,
        gaps_by_length,
        frequency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQUENCE: [f64; 7] = [1.50, 1.80, 2.50, 1.10, 1.20, 1.30, 2.00];

    #[test]
    fn test_reference_sequence() {
        let report = analyze(&SEQUENCE, &AnalysisConfig::default()).unwrap();

        assert_eq!(report.sequence_len, 7);
        assert_eq!(report.streaks.len(), 2);
        assert_eq!(report.top_streaks.len(), 2);
        assert_eq!(report.streak_stats.max_length, Some(3));
        assert_eq!(report.gap_stats.min, 3);
        assert!(report.gaps_by_length.is_empty());
        assert_eq!(report.reported_lengths(), vec![3]);
        assert_eq!(report.frequency.total, 2);
    }

    #[test]
    fn test_empty_sequence() {
        let report = analyze(&[], &AnalysisConfig::default()).unwrap();

        assert!(report.is_empty());
        assert!(report.outcome_stats.is_none());
        assert_eq!(report.streak_stats.count, 0);
        assert!(report.gap_stats.is_empty());
    }

    #[test]
    fn test_lookup_by_length() {
        let sequence = [1.0, 3.0, 1.5, 3.0, 1.2, 1.3, 3.0, 1.9];
        let report = analyze(&sequence, &AnalysisConfig::default()).unwrap();

        let singles: Vec<usize> = report
            .streaks_of_length(1)
            .iter()
            .map(|s| s.start_index())
            .collect();
        assert_eq!(singles, vec![0, 2, 7]);
        assert!(report.streaks_of_length(5).is_empty());
        assert_eq!(report.gaps_by_length[&1].count, 3);
    }

    #[test]
    fn test_invalid_threshold() {
        let result = analyze(&SEQUENCE, &AnalysisConfig::new(0.0, 10));
        assert!(matches!(result, Err(AnalysisError::InvalidParameter(_))));
    }

    #[test]
    fn test_invalid_outcome() {
        let result = analyze(&[1.0, f64::NAN], &AnalysisConfig::default());
        assert!(matches!(
            result,
            Err(AnalysisError::InvalidOutcome { index: 1, .. })
        ));
    }
}
