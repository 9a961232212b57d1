//! Streak detection.
//!
//! Splits an outcome sequence into maximal runs of values strictly below a
//! threshold. Runs never overlap and are reported in the order they occur.

mod detector;
mod groups;
mod streak;

pub use detector::{detect, StreakDetector};
pub use groups::StreakGroups;
pub use streak::Streak;
