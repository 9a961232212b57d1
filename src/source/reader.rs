//! Outcome loading from CSV.
//!
//! The value of a record is its last field, which covers both single-column
//! files and the two-column `Index,<label>` histories written by
//! [`super::write_history`]. Header records are dropped before values reach
//! the analysis.

use super::{SourceError, DEFAULT_VALUE_LABEL};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A record whose value could not be used as an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalformedRecord {
    /// 1-based line number in the source.
    pub line: u64,
    /// The offending field text.
    pub value: String,
}

impl std::fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {:?}", self.line, self.value)
    }
}

/// Outcomes read from a source, plus any records that were skipped.
#[derive(Debug, Clone, Default)]
pub struct LoadedOutcomes {
    /// Parsed outcomes in source order.
    pub outcomes: Vec<f64>,
    /// Records skipped as malformed.
    pub skipped: Vec<MalformedRecord>,
}

/// Reads outcome sequences from CSV sources.
#[derive(Debug, Clone)]
pub struct OutcomeReader {
    value_label: String,
    strict: bool,
}

impl Default for OutcomeReader {
    fn default() -> Self {
        Self {
            value_label: DEFAULT_VALUE_LABEL.to_string(),
            strict: false,
        }
    }
}

impl OutcomeReader {
    /// Creates a reader using the default value label.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label that identifies header records.
    pub fn with_value_label(mut self, label: impl Into<String>) -> Self {
        self.value_label = label.into();
        self
    }

    /// In strict mode the first malformed record fails the whole read
    /// instead of being skipped.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Reads outcomes from a CSV file.
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<LoadedOutcomes, SourceError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let loaded = self.read(file)?;

        tracing::info!(
            path = %path.display(),
            outcomes = loaded.outcomes.len(),
            skipped = loaded.skipped.len(),
            "Loaded outcomes"
        );

        Ok(loaded)
    }

    /// Reads outcomes from any CSV byte source.
    pub fn read<R: Read>(&self, source: R) -> Result<LoadedOutcomes, SourceError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(source);

        let mut loaded = LoadedOutcomes::default();

        for (i, result) in reader.records().enumerate() {
            let record = result?;
            let Some(field) = record.iter().last() else {
                continue;
            };
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(i as u64 + 1);

            match parse_outcome(field) {
                Some(value) => loaded.outcomes.push(value),
                None if self.is_header(field, i) => {
                    tracing::debug!(line, label = field, "Skipping header record");
                }
                None => {
                    let malformed = MalformedRecord {
                        line,
                        value: field.to_string(),
                    };
                    if self.strict {
                        return Err(SourceError::MalformedRecord(malformed));
                    }
                    tracing::warn!(record = %malformed, "Skipping malformed record");
                    loaded.skipped.push(malformed);
                }
            }
        }

        if loaded.outcomes.is_empty() {
            return Err(SourceError::EmptyInput);
        }

        Ok(loaded)
    }

    /// A non-numeric first record or any record holding the value label.
    /// Numbers that fail validation are never headers.
    fn is_header(&self, field: &str, record_index: usize) -> bool {
        (record_index == 0 && field.parse::<f64>().is_err())
            || field.eq_ignore_ascii_case(&self.value_label)
    }
}

/// Reads outcomes from a CSV file with default settings.
pub fn read_outcomes(path: impl AsRef<Path>) -> Result<LoadedOutcomes, SourceError> {
    OutcomeReader::new().read_path(path)
}

/// Reads outcomes from any CSV source with default settings.
pub fn read_outcomes_from<R: Read>(source: R) -> Result<LoadedOutcomes, SourceError> {
    OutcomeReader::new().read(source)
}

/// Parses a field as an outcome: a finite, non-negative number.
fn parse_outcome(field: &str) -> Option<f64> {
    field
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
