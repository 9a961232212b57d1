//! Single-pass streak segmentation.
//!
//! The detector keeps only the run currently open, so it can be fed one
//! outcome at a time and never needs to look back.

use super::Streak;

/// Incremental detector for runs of outcomes strictly below a threshold.
#[derive(Debug, Clone)]
pub struct StreakDetector {
    threshold: f64,
    /// Index of the next outcome to be pushed.
    position: usize,
    /// Start of the open run, if any.
    current_start: usize,
    /// Values of the open run; empty when no run is open.
    current: Vec<f64>,
}

impl StreakDetector {
    /// Creates a detector for the given threshold.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            position: 0,
            current_start: 0,
            current: Vec::new(),
        }
    }

    /// Returns the threshold in use.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the number of outcomes pushed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Feeds the next outcome.
    ///
    /// Returns the streak closed by this outcome, if it ended one.
    pub fn push(&mut self, value: f64) -> Option<Streak> {
        let index = self.position;
        self.position += 1;

        if value < self.threshold {
            if self.current.is_empty() {
                self.current_start = index;
            }
            self.current.push(value);
            None
        } else {
            self.close()
        }
    }

    /// Ends the input, returning a run still open at the end of the sequence.
    pub fn finish(&mut self) -> Option<Streak> {
        self.close()
    }

    fn close(&mut self) -> Option<Streak> {
        if self.current.is_empty() {
            return None;
        }
        let values = std::mem::take(&mut self.current);
        Some(Streak::new(self.current_start, values))
    }
}

/// Detects every maximal below-threshold run, ordered by start index.
pub fn detect(sequence: &[f64], threshold: f64) -> Vec<Streak> {
    let mut detector = StreakDetector::new(threshold);
    let mut streaks: Vec<Streak> = sequence
        .iter()
        .filter_map(|&value| detector.push(value))
        .collect();
    streaks.extend(detector.finish());

    tracing::debug!(
        outcomes = sequence.len(),
        streaks = streaks.len(),
        threshold,
        "Detected streaks"
    );

    streaks
}
