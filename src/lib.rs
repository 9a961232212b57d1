//! Streak Analyzer Library
//!
//! Regenerates provably-fair crash outcome histories from a seed chain and
//! analyzes runs ("streaks") of outcomes below a threshold: where they
//! occur, how long they are, and how far apart they fall.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! generation (optional) → detection → ranking ─┐
//!                              └──→ statistics ─┴→ report
//! ```
//!
//! # Design Principles
//!
//! - **Deterministic**: the same seed, variant and parameters always yield
//!   the same outcomes and the same report
//! - **Pure analysis**: [`analyze`] is a function from a sequence to an
//!   immutable [`AnalysisReport`]; no state survives between calls
//! - **Explicit empty states**: statistics over nothing are reported as
//!   undefined, never divided by zero
//! - **Uses standard primitives**: SHA-256 for the seed chain, HMAC-SHA256
//!   for the draw
//!
//! # Example
//!
//! ```no_run
//! use streak_analyzer::{
//!     config::AnalysisConfig,
//!     generation::{HashChainGenerator, KeyVariant},
//!     report::{analyze, TextReport},
//! };
//!
//! let seed = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
//! let outcomes = HashChainGenerator::new(KeyVariant::Default)
//!     .generate(seed, 10_000)
//!     .unwrap();
//!
//! let report = analyze(&outcomes, &AnalysisConfig::default()).unwrap();
//! println!("{}", TextReport::new(&report));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod detection;
pub mod generation;
pub mod ranking;
pub mod report;
pub mod source;
pub mod statistics;

// Re-export commonly used types at crate root
pub use config::{AnalysisConfig, FileConfig, GeneratorConfig, OutputConfig};
pub use detection::{detect, Streak, StreakDetector};
pub use generation::{generate, HashChainGenerator, KeyVariant};
pub use ranking::{select_top, RankedStreak};
pub use report::{analyze, AnalysisError, AnalysisReport};
pub use statistics::{gaps_by_length, GapStats, OutcomeStats, StatSummary, StreakLengthStats};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
