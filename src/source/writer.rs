//! History persistence.
//!
//! Histories are written as `Index,<label>` CSV. Nothing in the crate reads
//! this format back except through the generic [`super::OutcomeReader`].

use super::SourceError;
use chrono::{DateTime, TimeZone};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes `(index, outcome)` rows with a two-column header.
pub fn write_history<W: Write>(
    destination: W,
    outcomes: &[f64],
    value_label: &str,
) -> Result<(), SourceError> {
    let mut writer = csv::Writer::from_writer(destination);
    writer.write_record(["Index", value_label])?;
    for (index, value) in outcomes.iter().enumerate() {
        writer.write_record([index.to_string(), value.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a history file into `directory`, creating it if needed.
///
/// Returns the path of the written file.
pub fn save_history(
    directory: impl AsRef<Path>,
    file_name: &str,
    outcomes: &[f64],
    value_label: &str,
) -> Result<PathBuf, SourceError> {
    let directory = directory.as_ref();
    std::fs::create_dir_all(directory)?;

    let path = directory.join(file_name);
    write_history(File::create(&path)?, outcomes, value_label)?;

    tracing::info!(
        path = %path.display(),
        outcomes = outcomes.len(),
        "Saved outcome history"
    );

    Ok(path)
}

/// Builds a history file name from the seed prefix and a timestamp:
/// `crash_only_<first 6 seed characters>_<YYYYmmdd_HHMMSS>.csv`.
pub fn history_file_name<Tz>(seed: &str, timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let prefix: String = seed.chars().take(6).collect();
    format!(
        "crash_only_{}_{}.csv",
        prefix,
        timestamp.format("%Y%m%d_%H%M%S")
    )
}
