//! Frequency table of streak lengths.

use crate::detection::{Streak, StreakGroups};
use serde::{Deserialize, Serialize};

/// One row of the frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRow {
    /// Streak length.
    pub length: usize,
    /// Number of streaks with this length.
    pub count: usize,
    /// Share of all streaks, in percent.
    pub percentage: f64,
}

/// How often each streak length occurs.
///
/// Rows are restricted to lengths at or above a minimum, but percentages are
/// relative to the total number of streaks of every length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    /// Total number of streaks of any length.
    pub total: usize,
    /// Rows in ascending length order.
    pub rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    /// Builds the table for streaks of at least `min_length`.
    pub fn compute(streaks: &[Streak], min_length: usize) -> Self {
        let groups = StreakGroups::from_streaks(streaks);
        let total = groups.total();

        let rows = groups
            .iter()
            .filter(|&(length, _)| length >= min_length)
            .map(|(length, group)| FrequencyRow {
                length,
                count: group.len(),
                percentage: group.len() as f64 / total as f64 * 100.0,
            })
            .collect();

        Self { total, rows }
    }
}

impl std::fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            writeln!(
                f,
                "Streak Length: {:<3} | Count: {:<4} | Frequency: {:.2}%",
                row.length, row.count, row.percentage
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn streak(start: usize, len: usize) -> Streak {
        Streak::new(start, vec![1.0; len])
    }

    #[test]
    fn test_percentages_use_all_streaks() {
        let streaks = vec![streak(0, 1), streak(2, 1), streak(4, 3), streak(9, 4)];
        let table = FrequencyTable::compute(&streaks, 3);

        assert_eq!(table.total, 4);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].length, 3);
        assert_eq!(table.rows[0].percentage, 25.0);
        assert_eq!(
            table.to_string(),
            "Streak Length: 3   | Count: 1    | Frequency: 25.00%\n\
             Streak Length: 4   | Count: 1    | Frequency: 25.00%\n"
        );
    }

    #[test]
    fn test_empty() {
        let table = FrequencyTable::compute(&[], 3);
        assert_eq!(table.total, 0);
        assert!(table.rows.is_empty());
    }
}
