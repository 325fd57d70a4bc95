//! Random alias generation.
//!
//! Aliases are drawn uniformly from the 62-character alphanumeric alphabet
//! using one OS-seeded generator shared by all callers.

use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Length of generated aliases when no other length is configured.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Thread-safe generator of random aliases.
///
/// Uniqueness is not guaranteed here. The store rejects duplicates and the
/// shortening service reports them as conflicts.
///
/// # Examples
///
/// ```ignore
/// let generator = AliasGenerator::from_os_rng();
/// let alias = generator.generate(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub struct AliasGenerator {
    rng: Mutex<StdRng>,
}

impl AliasGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a generator from an explicit RNG (deterministic in tests).
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Returns an alias of exactly `length` alphanumeric characters.
    pub fn generate(&self, length: usize) -> String {
        // A panic while sampling cannot leave the RNG in a broken state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        (0..length)
            .map(|_| char::from(rng.sample(Alphanumeric)))
            .collect()
    }

    /// Returns an alias of `length` characters for which `reject` is false,
    /// drawing again as long as it is true.
    ///
    /// `reject` must leave some alias of this length acceptable, or this
    /// never returns.
    pub fn generate_excluding(&self, length: usize, reject: impl Fn(&str) -> bool) -> String {
        loop {
            let alias = self.generate(length);
            if !reject(&alias) {
                return alias;
            }
        }
    }
}

impl Default for AliasGenerator {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_generate_has_requested_length() {
        let generator = AliasGenerator::from_os_rng();

        for length in [1, DEFAULT_ALIAS_LENGTH, 16, 32] {
            assert_eq!(generator.generate(length).len(), length);
        }
    }

    #[test]
    fn test_generate_zero_length_is_empty() {
        let generator = AliasGenerator::from_os_rng();
        assert!(generator.generate(0).is_empty());
    }

    #[test]
    fn test_generate_alphanumeric_only() {
        let generator = AliasGenerator::from_os_rng();

        for _ in 0..200 {
            let alias = generator.generate(DEFAULT_ALIAS_LENGTH);
            assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_uses_whole_alphabet() {
        let generator = AliasGenerator::from_os_rng();
        let alias = generator.generate(10_000);

        assert!(alias.chars().any(|c| c.is_ascii_lowercase()));
        assert!(alias.chars().any(|c| c.is_ascii_uppercase()));
        assert!(alias.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_rapid_calls_do_not_repeat() {
        let generator = AliasGenerator::from_os_rng();
        let aliases: HashSet<String> = (0..1000).map(|_| generator.generate(12)).collect();

        assert_eq!(aliases.len(), 1000);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let first = AliasGenerator::with_rng(StdRng::seed_from_u64(42));
        let second = AliasGenerator::with_rng(StdRng::seed_from_u64(42));

        assert_eq!(
            first.generate(DEFAULT_ALIAS_LENGTH),
            second.generate(DEFAULT_ALIAS_LENGTH)
        );
    }

    #[test]
    fn test_generate_excluding_draws_again() {
        let reference = AliasGenerator::with_rng(StdRng::seed_from_u64(7));
        let first = reference.generate(DEFAULT_ALIAS_LENGTH);
        let second = reference.generate(DEFAULT_ALIAS_LENGTH);

        let generator = AliasGenerator::with_rng(StdRng::seed_from_u64(7));
        let alias = generator.generate_excluding(DEFAULT_ALIAS_LENGTH, |candidate| {
            candidate == first
        });

        assert_eq!(alias, second);
    }

    #[test]
    fn test_generate_excluding_keeps_accepted_draw() {
        let reference = AliasGenerator::with_rng(StdRng::seed_from_u64(7));
        let first = reference.generate(DEFAULT_ALIAS_LENGTH);

        let generator = AliasGenerator::with_rng(StdRng::seed_from_u64(7));
        let alias = generator.generate_excluding(DEFAULT_ALIAS_LENGTH, |_| false);

        assert_eq!(alias, first);
    }

    #[test]
    fn test_shared_across_threads() {
        let generator = Arc::new(AliasGenerator::from_os_rng());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let generator = generator.clone();
                std::thread::spawn(move || {
                    (0..100)
                        .map(|_| generator.generate(12))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            all.extend(handle.join().unwrap());
        }

        assert_eq!(all.len(), 800);
    }
}
