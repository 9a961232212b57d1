//! Text and JSON rendering of analysis reports.

use super::AnalysisReport;
use std::fmt;

/// Plain-text rendering of a full report.
pub struct TextReport<'a> {
    report: &'a AnalysisReport,
    history: Option<&'a [f64]>,
}

impl<'a> TextReport<'a> {
    /// Renders `report` without the outcome history.
    pub fn new(report: &'a AnalysisReport) -> Self {
        Self {
            report,
            history: None,
        }
    }

    /// Appends the full outcome history to the rendering.
    pub fn with_history(mut self, outcomes: &'a [f64]) -> Self {
        self.history = Some(outcomes);
        self
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;

        writeln!(
            f,
            "Top {} Sub-{}X Streaks (from {} games):",
            report.config.top_n, report.config.threshold, report.sequence_len
        )?;
        let listing: Vec<String> = report
            .top_streaks
            .iter()
            .map(|ranked| ranked.streak.to_string())
            .collect();
        writeln!(f, "{}", listing.join(", "))?;

        writeln!(f, "\n--- Multiplier Stats ---")?;
        match &report.outcome_stats {
            Some(stats) => write!(f, "{}", stats.summary())?,
            None => writeln!(f, "No outcomes")?,
        }

        writeln!(f, "\n--- Streak Stats ---")?;
        write!(f, "{}", report.streak_stats.summary())?;

        writeln!(f, "\n--- Gap Stats ---")?;
        write!(f, "{}", report.gap_stats.summary())?;
        writeln!(f, "Min Gap Between: {}", display_pair(&report.gap_stats.min_pair))?;
        writeln!(f, "Max Gap Between: {}", display_pair(&report.gap_stats.max_pair))?;

        writeln!(f, "\n--- Gap Per Streak Length ---")?;
        for (length, stats) in &report.gaps_by_length {
            writeln!(
                f,
                "Streak {}: Min = {}, Max = {}, Avg = {:.2}, Count = {}",
                length, stats.min_gap, stats.max_gap, stats.mean_gap, stats.count
            )?;
        }

        writeln!(f, "\n--- Frequency Summary ---")?;
        write!(f, "{}", report.frequency)?;

        if let Some(outcomes) = self.history {
            writeln!(f, "\n--- Full Outcome History ---")?;
            for (index, value) in outcomes.iter().enumerate() {
                writeln!(f, "{}: {}", index, value)?;
            }
        }

        Ok(())
    }
}

fn display_pair(pair: &Option<crate::statistics::GapPair>) -> String {
    pair.map_or_else(|| "N/A".to_string(), |p| p.to_string())
}

/// Plain-text rendering of every streak of one length.
pub struct LengthGroupView<'a> {
    length: usize,
    streaks: Vec<&'a crate::detection::Streak>,
}

impl<'a> LengthGroupView<'a> {
    /// Collects the streaks of `length` from `report`.
    ///
    /// Returns `None` when no streak has that length.
    pub fn new(report: &'a AnalysisReport, length: usize) -> Option<Self> {
        let streaks = report.streaks_of_length(length);
        if streaks.is_empty() {
            return None;
        }
        Some(Self { length, streaks })
    }
}

impl fmt::Display for LengthGroupView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let starts: Vec<String> = self
            .streaks
            .iter()
            .map(|s| s.start_index().to_string())
            .collect();

        writeln!(f, "Streak Length: {}\n", self.length)?;
        writeln!(f, "Start Indices:\n[{}]\n", starts.join(", "))?;
        writeln!(f, "Multiplier Sequences:")?;
        for streak in &self.streaks {
            let values: Vec<String> = streak.values().iter().map(|v| format!("{:.2}", v)).collect();
            writeln!(f, "[{}]", values.join(", "))?;
        }
        Ok(())
    }
}

/// Serializes a report as pretty-printed JSON.
pub fn to_json(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
