//! Statistics over outcomes and streaks.
//!
//! Every estimator is a population estimator and every percentile is
//! linearly interpolated. Each statistics type keeps full precision and
//! converts to a rounded [`StatSummary`] for presentation.

mod descriptive;
mod frequency;
mod gaps;
mod outcome;
mod streaks;
mod summary;

pub use descriptive::round_to;
pub use frequency::{FrequencyRow, FrequencyTable};
pub use gaps::{gaps_by_length, GapEndpoint, GapPair, GapStats, LengthGapStats, LengthGapTable};
pub use outcome::OutcomeStats;
pub use streaks::StreakLengthStats;
pub use summary::{Metric, StatSummary};

/// Errors that can occur while computing statistics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("no values to summarize")]
    EmptyInput,
}
