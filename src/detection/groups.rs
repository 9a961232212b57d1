//! Grouping of streaks by length.

use super::Streak;
use std::collections::BTreeMap;

/// Streaks grouped by length, each group in start-index order.
///
/// Lengths are unbounded; a group exists only for lengths that occur.
#[derive(Debug, Clone, Default)]
pub struct StreakGroups<'a> {
    groups: BTreeMap<usize, Vec<&'a Streak>>,
}

impl<'a> StreakGroups<'a> {
    /// Groups `streaks` by length, preserving their relative order.
    pub fn from_streaks(streaks: impl IntoIterator<Item = &'a Streak>) -> Self {
        let mut groups: BTreeMap<usize, Vec<&'a Streak>> = BTreeMap::new();
        for streak in streaks {
            groups.entry(streak.length()).or_default().push(streak);
        }
        Self { groups }
    }

    /// Returns the streaks of the given length.
    pub fn get(&self, length: usize) -> &[&'a Streak] {
        self.groups.get(&length).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over `(length, streaks)` in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[&'a Streak])> + '_ {
        self.groups.iter().map(|(&len, group)| (len, group.as_slice()))
    }

    /// Returns the number of distinct lengths.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no streaks.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the total number of streaks over all groups.
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_by_length() {
        let streaks = vec![
            Streak::new(0, vec![1.0]),
            Streak::new(2, vec![1.0, 1.0]),
            Streak::new(5, vec![1.0]),
        ];
        let groups = StreakGroups::from_streaks(&streaks);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups.total(), 3);
        let singles: Vec<usize> = groups.get(1).iter().map(|s| s.start_index()).collect();
        assert_eq!(singles, vec![0, 5]);
        assert!(groups.get(7).is_empty());
    }

    #[test]
    fn test_long_streaks_are_kept() {
        let streaks = vec![Streak::new(0, vec![1.0; 150])];
        let groups = StreakGroups::from_streaks(&streaks);

        assert_eq!(groups.get(150).len(), 1);
    }
}
