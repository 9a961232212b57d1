//! Streak ranking.
//!
//! Picks the longest streaks of an analysis for presentation.

mod top;

pub use top::{select_top, RankedStreak};
