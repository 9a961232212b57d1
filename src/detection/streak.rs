//! Streak type representing a maximal below-threshold run.

use serde::{Deserialize, Serialize};

/// A maximal contiguous run of outcomes below the threshold.
///
/// The streak owns a copy of its values; `start_index` refers back into the
/// analyzed sequence only as a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Streak {
    start_index: usize,
    values: Vec<f64>,
}

impl Streak {
    /// Creates a streak starting at `start_index` with the given values.
    pub fn new(start_index: usize, values: Vec<f64>) -> Self {
        Self {
            start_index,
            values,
        }
    }

    /// Returns the number of outcomes in the streak.
    #[inline]
    pub fn length(&self) -> usize {
        self.values.len()
    }

    /// Returns the index of the first outcome.
    #[inline]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Returns the index one past the last outcome.
    #[inline]
    pub fn end_index(&self) -> usize {
        self.start_index + self.values.len()
    }

    /// Returns the outcomes of the streak in order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl std::fmt::Display for Streak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.length(), self.start_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_bounds() {
        let streak = Streak::new(3, vec![1.1, 1.2, 1.3]);

        assert_eq!(streak.length(), 3);
        assert_eq!(streak.start_index(), 3);
        assert_eq!(streak.end_index(), 6);
        assert_eq!(streak.to_string(), "3 @ 3");
    }
}
