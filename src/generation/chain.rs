//! Forward-only SHA-256 seed chain.
//!
//! Each seed after the first is the lowercase hex SHA-256 digest of the
//! previous seed's text. The chain is produced lazily so that callers can
//! stream very long histories without materializing every seed.

use sha2::{Digest, Sha256};

/// Minimum seed length in characters (one hex-encoded SHA-256 digest).
pub const MIN_SEED_LEN: usize = 64;

/// Returns the lowercase hex SHA-256 digest of the UTF-8 bytes of `data`.
pub fn sha256_hex(data: &str) -> String {
    hex::encode(Sha256::digest(data.as_bytes()))
}

/// Returns true if `seed` is a well-formed seed: at least
/// [`MIN_SEED_LEN`] characters, all of them hex digits.
pub fn is_valid_seed(seed: &str) -> bool {
    seed.len() >= MIN_SEED_LEN && seed.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Iterator over a seed chain, starting with the caller's seed.
///
/// The iterator is unbounded; use [`Iterator::take`] to limit it.
#[derive(Debug, Clone)]
pub struct SeedChain {
    next: String,
}

impl SeedChain {
    /// Starts a chain at `seed`. The seed is not validated here.
    pub fn new(seed: impl Into<String>) -> Self {
        Self { next: seed.into() }
    }
}

impl Iterator for SeedChain {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let following = sha256_hex(&self.next);
        Some(std::mem::replace(&mut self.next, following))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    #[test]
    fn test_sha256_hex_known_value() {
        assert_eq!(
            sha256_hex(SEED),
            "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb"
        );
    }

    #[test]
    fn test_chain_starts_with_seed() {
        let chain: Vec<String> = SeedChain::new(SEED).take(3).collect();

        assert_eq!(chain.len(), 3);
        assert_eq!(chain[0], SEED);
        assert_eq!(chain[1], sha256_hex(SEED));
        assert_eq!(chain[2], sha256_hex(&chain[1]));
    }

    #[test]
    fn test_seed_validation() {
        assert!(is_valid_seed(SEED));
        assert!(is_valid_seed(&SEED.to_uppercase()));
        assert!(!is_valid_seed(&SEED[..63]));
        assert!(!is_valid_seed(&format!("{}z", &SEED[..63])));
        assert!(!is_valid_seed(""));
    }
}
