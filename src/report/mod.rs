//! Analysis reports.
//!
//! [`analyze`] runs detection, ranking and every statistic over a sequence
//! and returns an immutable [`AnalysisReport`]. Selecting streaks by length
//! is a lookup into that value; nothing is stored between runs.

mod analysis;
mod render;

pub use analysis::{analyze, AnalysisError, AnalysisReport};
pub use render::{to_json, LengthGroupView, TextReport};
