//! Provably-fair outcome draw.
//!
//! An outcome is derived from a single chain seed by keying HMAC-SHA256 with
//! the seed and authenticating a fixed public block hash. The first 32 bits
//! of the MAC select a point on a long-tailed distribution which is then
//! truncated to two decimals.

use super::GenerationError;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// House edge applied to every draw.
pub const HOUSE_EDGE: f64 = 0.01;

/// Numerator of the draw, 2^32.
const DRAW_SPAN: f64 = 4_294_967_296.0;

/// Public block hash used as the default key material.
pub const DEFAULT_BLOCK_HASH: &str =
    "0000000000000000001b34dc6a1e86083f95500b096231436e9b25cbdd0075c4";

/// Public block hash used as the alternate key material.
pub const ALTERNATE_BLOCK_HASH: &str =
    "000000000000000000066448f2f56069750fc40c718322766b6bdf63fdcf45b8";

/// Selects which public key material a draw authenticates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyVariant {
    /// Default block hash.
    #[default]
    Default,
    /// Alternate block hash.
    Alternate,
}

impl KeyVariant {
    /// Returns the key material text for this variant.
    pub fn key_material(self) -> &'static str {
        match self {
            KeyVariant::Default => DEFAULT_BLOCK_HASH,
            KeyVariant::Alternate => ALTERNATE_BLOCK_HASH,
        }
    }
}

/// Computes the 32-bit draw value for a seed: the first eight hex digits of
/// `HMAC-SHA256(key = seed, message = key material)`.
pub fn draw_value(seed: &str, variant: KeyVariant) -> Result<u32, GenerationError> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(seed.as_bytes()).map_err(|_| {
        GenerationError::InvalidSeed {
            reason: "seed cannot key HMAC-SHA256".to_string(),
        }
    })?;
    mac.update(variant.key_material().as_bytes());
    let digest = mac.finalize().into_bytes();

    let mut prefix = [0u8; 4];
    prefix.copy_from_slice(&digest[..4]);
    Ok(u32::from_be_bytes(prefix))
}

/// Maps a draw value to an outcome, truncated (not rounded) to two decimals.
pub fn outcome_from_draw(draw: u32) -> f64 {
    let multiplier = (DRAW_SPAN / (f64::from(draw) + 1.0)) * (1.0 - HOUSE_EDGE);
    (multiplier * 100.0).trunc() / 100.0
}

/// Computes the outcome of the round played with `seed`.
///
/// The seed is used as-is; validation belongs to the caller (see
/// [`super::HashChainGenerator`]).
pub fn crash_point(seed: &str, variant: KeyVariant) -> Result<f64, GenerationError> {
    draw_value(seed, variant).map(outcome_from_draw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    #[test]
    fn test_draw_value_known_prefix() {
        assert_eq!(draw_value(SEED, KeyVariant::Default).unwrap(), 0x80bd_5fbe);
        assert_eq!(draw_value(SEED, KeyVariant::Alternate).unwrap(), 0x92d2_1614);
    }

    #[test]
    fn test_crash_point_known_values() {
        assert_eq!(crash_point(SEED, KeyVariant::Default).unwrap(), 1.96);
        assert_eq!(crash_point(SEED, KeyVariant::Alternate).unwrap(), 1.72);
    }

    #[test]
    fn test_outcome_truncates() {
        // 2^32 / 2^31 = 2.0 before the edge
        assert_eq!(outcome_from_draw(0x7FFF_FFFF), 1.98);
        // Largest draw gives the smallest outcome
        assert_eq!(outcome_from_draw(u32::MAX), 0.99);
    }

    #[test]
    fn test_zero_draw_is_large() {
        let outcome = outcome_from_draw(0);
        assert!(outcome > 4.0e9);
        assert_eq!(outcome, (outcome * 100.0).trunc() / 100.0);
    }
}
