//! Outcome sequence generation from a seed chain.

use super::{
    chain::{is_valid_seed, SeedChain, MIN_SEED_LEN},
    draw::{crash_point, KeyVariant},
    GenerationError,
};

/// Regenerates a deterministic outcome history from a seed.
///
/// Every outcome is a pure function of its chain seed and the selected key
/// material, so two generators with the same variant always agree.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashChainGenerator {
    key_variant: KeyVariant,
}

impl HashChainGenerator {
    /// Creates a generator drawing against the given key material.
    pub fn new(key_variant: KeyVariant) -> Self {
        Self { key_variant }
    }

    /// Returns the key variant in use.
    #[inline]
    pub fn key_variant(&self) -> KeyVariant {
        self.key_variant
    }

    /// Generates `count` outcomes, one per seed of the chain starting at
    /// `seed`, in chain order.
    pub fn generate(&self, seed: &str, count: usize) -> Result<Vec<f64>, GenerationError> {
        validate_seed(seed)?;
        if count < 1 {
            return Err(GenerationError::InvalidParameter(
                "sample count must be at least 1".to_string(),
            ));
        }

        let outcomes = SeedChain::new(seed)
            .take(count)
            .map(|s| crash_point(&s, self.key_variant))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            count,
            variant = ?self.key_variant,
            "Generated outcomes from seed chain"
        );

        Ok(outcomes)
    }

    /// Computes the outcome of a single round after validating the seed.
    pub fn verify(&self, seed: &str) -> Result<f64, GenerationError> {
        validate_seed(seed)?;
        crash_point(seed, self.key_variant)
    }
}

/// Generates `count` outcomes from `seed` with the given key material.
pub fn generate(
    seed: &str,
    count: usize,
    key_variant: KeyVariant,
) -> Result<Vec<f64>, GenerationError> {
    HashChainGenerator::new(key_variant).generate(seed, count)
}

fn validate_seed(seed: &str) -> Result<(), GenerationError> {
    if seed.len() < MIN_SEED_LEN {
        return Err(GenerationError::InvalidSeed {
            reason: format!(
                "expected at least {} characters, got {}",
                MIN_SEED_LEN,
                seed.len()
            ),
        });
    }
    if !is_valid_seed(seed) {
        return Err(GenerationError::InvalidSeed {
            reason: "seed must contain only hex digits".to_string(),
        });
    }
    Ok(())
}
