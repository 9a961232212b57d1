//! Spacing between streaks.
//!
//! A gap is the distance between the start indices of two streaks. Gaps are
//! measured either between consecutive entries of a chronologically ordered
//! subset (such as the ranked top streaks) or between consecutive
//! occurrences of the same streak length.

use super::{
    descriptive::{mean, round_to, std_dev},
    StatSummary,
};
use crate::detection::{Streak, StreakGroups};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One end of a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapEndpoint {
    /// Length of the streak.
    pub length: usize,
    /// Start index of the streak.
    pub start_index: usize,
}

impl From<&Streak> for GapEndpoint {
    fn from(streak: &Streak) -> Self {
        Self {
            length: streak.length(),
            start_index: streak.start_index(),
        }
    }
}

/// The pair of streaks that produced a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapPair {
    /// Earlier streak.
    pub from: GapEndpoint,
    /// Later streak.
    pub to: GapEndpoint,
    /// Start-index distance between them.
    pub gap: usize,
}

impl std::fmt::Display for GapPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} @ {} → {} @ {} (gap = {})",
            self.from.length, self.from.start_index, self.to.length, self.to.start_index, self.gap
        )
    }
}

/// Gap statistics over a chronologically ordered subset of streaks.
///
/// With fewer than two streaks every value is zero and both pairs are
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapStats {
    /// Number of gaps measured.
    pub count: usize,
    /// Mean gap.
    pub mean: f64,
    /// Population standard deviation of the gaps.
    pub std_dev: f64,
    /// Smallest gap.
    pub min: usize,
    /// Largest gap.
    pub max: usize,
    /// First pair producing the smallest gap.
    pub min_pair: Option<GapPair>,
    /// First pair producing the largest gap.
    pub max_pair: Option<GapPair>,
}

impl GapStats {
    /// Computes gap statistics over `streaks` in chronological order.
    pub fn compute<'a>(streaks: impl IntoIterator<Item = &'a Streak>) -> Self {
        let mut streaks: Vec<&Streak> = streaks.into_iter().collect();
        streaks.sort_by_key(|s| s.start_index());
        let pairs: Vec<GapPair> = streaks
            .windows(2)
            .map(|w| GapPair {
                from: GapEndpoint::from(w[0]),
                to: GapEndpoint::from(w[1]),
                gap: w[1].start_index() - w[0].start_index(),
            })
            .collect();

        if pairs.is_empty() {
            return Self::default();
        }

        let gaps: Vec<f64> = pairs.iter().map(|p| p.gap as f64).collect();

        // Strict comparisons keep the first occurrence of each extreme.
        let mut min_pair = pairs[0];
        let mut max_pair = pairs[0];
        for pair in &pairs[1..] {
            if pair.gap < min_pair.gap {
                min_pair = *pair;
            }
            if pair.gap > max_pair.gap {
                max_pair = *pair;
            }
        }

        Self {
            count: pairs.len(),
            mean: mean(&gaps),
            std_dev: std_dev(&gaps),
            min: min_pair.gap,
            max: max_pair.gap,
            min_pair: Some(min_pair),
            max_pair: Some(max_pair),
        }
    }

    /// Returns true if fewer than two streaks were available.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the rounded named metrics.
    pub fn summary(&self) -> StatSummary {
        StatSummary::new()
            .with("Average Gap Between Top Streaks", round_to(self.mean, 2))
            .with("Std Dev of Gaps", round_to(self.std_dev, 2))
            .with("Minimum Gap", self.min as f64)
            .with("Maximum Gap", self.max as f64)
    }
}

/// Gap statistics between consecutive streaks of one length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthGapStats {
    /// Number of streaks of this length.
    pub count: usize,
    /// Smallest gap between consecutive occurrences.
    pub min_gap: usize,
    /// Largest gap between consecutive occurrences.
    pub max_gap: usize,
    /// Mean gap between consecutive occurrences.
    pub mean_gap: f64,
}

impl LengthGapStats {
    /// Returns the rounded named metrics.
    pub fn summary(&self) -> StatSummary {
        StatSummary::new()
            .with("Min Gap", self.min_gap as f64)
            .with("Max Gap", self.max_gap as f64)
            .with("Avg Gap", round_to(self.mean_gap, 2))
            .with("Count", self.count as f64)
    }
}

/// Per-length gap statistics keyed by streak length.
pub type LengthGapTable = BTreeMap<usize, LengthGapStats>;

/// Computes gap statistics for every streak length occurring at least twice.
///
/// Lengths with a single occurrence are omitted rather than reported as
/// zero.
pub fn gaps_by_length(streaks: &[Streak]) -> LengthGapTable {
    let groups = StreakGroups::from_streaks(streaks);

    groups
        .iter()
        .filter(|(_, group)| group.len() >= 2)
        .map(|(length, group)| {
            let mut starts: Vec<usize> = group.iter().map(|s| s.start_index()).collect();
            starts.sort_unstable();

            let gaps: Vec<usize> = starts.windows(2).map(|w| w[1] - w[0]).collect();
            let as_f64: Vec<f64> = gaps.iter().map(|&g| g as f64).collect();

            let stats = LengthGapStats {
                count: starts.len(),
                min_gap: gaps.iter().copied().min().unwrap_or(0),
                max_gap: gaps.iter().copied().max().unwrap_or(0),
                mean_gap: mean(&as_f64),
            };
            (length, stats)
        })
        .collect()
}
