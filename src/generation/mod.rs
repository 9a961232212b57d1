//! Deterministic outcome regeneration.
//!
//! Rebuilds a provably-fair outcome history from a seed: the seed is
//! iterated through SHA-256 to form a chain, and each chain seed keys an
//! HMAC-SHA256 draw against public key material. Output is reproducible
//! bit for bit from the same seed and key variant.

mod chain;
mod draw;
mod generator;

pub use chain::{is_valid_seed, sha256_hex, SeedChain, MIN_SEED_LEN};
pub use draw::{
    crash_point, draw_value, outcome_from_draw, KeyVariant, ALTERNATE_BLOCK_HASH,
    DEFAULT_BLOCK_HASH, HOUSE_EDGE,
};
pub use generator::{generate, HashChainGenerator};

use thiserror::Error;

/// Errors that can occur while generating outcomes.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("invalid seed: {reason}")]
    InvalidSeed { reason: String },
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
