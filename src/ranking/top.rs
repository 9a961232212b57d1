//! Top-N streak selection.

use crate::detection::Streak;
use serde::{Deserialize, Serialize};

/// A streak selected by [`select_top`], with its rank by length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedStreak {
    /// 1-based rank by length; ties are ranked by order of occurrence.
    pub rank: usize,
    /// The selected streak.
    pub streak: Streak,
}

/// Selects the `n` longest streaks and returns them in start-index order.
///
/// Ranking uses a stable sort on length (descending), so among streaks of
/// equal length the earlier one is kept when the cut falls inside a tie.
/// Only after the cut is the subset re-ordered chronologically.
pub fn select_top(streaks: &[Streak], n: usize) -> Vec<RankedStreak> {
    let mut by_length: Vec<&Streak> = streaks.iter().collect();
    // `sort_by` is stable; equal lengths keep their original order.
    by_length.sort_by(|a, b| b.length().cmp(&a.length()));

    let mut top: Vec<RankedStreak> = by_length
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, streak)| RankedStreak {
            rank: i + 1,
            streak: streak.clone(),
        })
        .collect();
    top.sort_by_key(|ranked| ranked.streak.start_index());

    tracing::debug!(
        requested = n,
        selected = top.len(),
        "Selected top streaks"
    );

    top
}

#[cfg(test)]
mod tests {
    use super::*;

    fn streak(start: usize, len: usize) -> Streak {
        Streak::new(start, vec![1.0; len])
    }

    fn starts(top: &[RankedStreak]) -> Vec<usize> {
        top.iter().map(|r| r.streak.start_index()).collect()
    }

    #[test]
    fn test_selects_longest_in_chronological_order() {
        let streaks = vec![streak(0, 1), streak(5, 4), streak(12, 2), streak(20, 3)];
        let top = select_top(&streaks, 2);

        assert_eq!(starts(&top), vec![5, 20]);
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[1].rank, 2);
    }

    #[test]
    fn test_ties_keep_earlier_streak() {
        let streaks = vec![streak(0, 2), streak(10, 3), streak(20, 2), streak(30, 2)];
        let top = select_top(&streaks, 2);

        // The length-3 streak, then the earliest length-2 streak
        assert_eq!(starts(&top), vec![0, 10]);
        assert_eq!(top[0].rank, 2);
    }

    #[test]
    fn test_n_larger_than_input() {
        let streaks = vec![streak(0, 3), streak(4, 1), streak(9, 2)];
        let top = select_top(&streaks, 100);

        assert_eq!(starts(&top), vec![0, 4, 9]);
    }

    #[test]
    fn test_empty_input() {
        assert!(select_top(&[], 10).is_empty());
    }

    #[test]
    fn test_zero_n() {
        assert!(select_top(&[streak(0, 1)], 0).is_empty());
    }
}
