//! Outcome sources and history persistence.
//!
//! Thin I/O around the analysis core: loading outcome sequences from CSV,
//! locating the most recent history, and writing generated histories.

mod reader;
mod writer;

pub use reader::{read_outcomes, read_outcomes_from, LoadedOutcomes, MalformedRecord, OutcomeReader};
pub use writer::{history_file_name, save_history, write_history};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default header label of the value column.
pub const DEFAULT_VALUE_LABEL: &str = "Crash Multiplier";

/// Errors that can occur while reading or writing outcome sources.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed record at {0}")]
    MalformedRecord(MalformedRecord),
    #[error("source contains no outcomes")]
    EmptyInput,
}

/// Returns the most recently modified `.csv` file in `directory`.
///
/// A missing directory is treated as empty.
pub fn latest_csv(directory: impl AsRef<Path>) -> Result<Option<PathBuf>, SourceError> {
    let entries = match std::fs::read_dir(directory.as_ref()) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut latest: Option<(std::time::SystemTime, PathBuf)> = None;
    for entry in entries {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv || !path.is_file() {
            continue;
        }

        let modified = std::fs::metadata(&path)?.modified()?;
        if latest.as_ref().map_or(true, |(newest, _)| modified > *newest) {
            latest = Some((modified, path));
        }
    }

    Ok(latest.map(|(_, path)| path))
}
