//! Streak length statistics.

use super::{
    descriptive::{mean, round_to, std_dev},
    StatSummary,
};
use crate::detection::Streak;
use serde::{Deserialize, Serialize};

/// Count and spread of streak lengths.
///
/// With no streaks the count is zero and every other field is `None`;
/// nothing is computed from an empty set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreakLengthStats {
    /// Number of streaks.
    pub count: usize,
    /// Longest streak length.
    pub max_length: Option<usize>,
    /// Mean streak length.
    pub mean_length: Option<f64>,
    /// Population standard deviation of streak lengths.
    pub std_dev: Option<f64>,
}

impl StreakLengthStats {
    /// Computes length statistics over `streaks`.
    pub fn compute(streaks: &[Streak]) -> Self {
        if streaks.is_empty() {
            return Self::default();
        }

        let lengths: Vec<f64> = streaks.iter().map(|s| s.length() as f64).collect();

        Self {
            count: streaks.len(),
            max_length: streaks.iter().map(Streak::length).max(),
            mean_length: Some(mean(&lengths)),
            std_dev: Some(std_dev(&lengths)),
        }
    }

    /// Returns true if no streaks were found.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the rounded named metrics.
    pub fn summary(&self) -> StatSummary {
        StatSummary::new()
            .with("Total Streaks", self.count as f64)
            .with("Longest Streak", self.max_length.map(|l| l as f64))
            .with("Average Streak Length", self.mean_length.map(|m| round_to(m, 2)))
            .with("Streak Length Std Dev", self.std_dev.map(|s| round_to(s, 2)))
    }
}
