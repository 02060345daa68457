//! Short code generation.
//!
//! Codes are 6 characters drawn uniformly, with replacement, from the 62-character
//! alphabet `a-z A-Z 0-9`. Generation makes no uniqueness promise; collisions are
//! resolved by [`crate::application::services::UrlRegistry`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 6;

/// Characters a short code may contain.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Codes that would shadow a fixed route and can never be issued.
pub const RESERVED_CODES: &[&str] = &["create", "health"];

/// Source of candidate short codes.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a fresh candidate code.
    fn generate(&self) -> String;
}

/// Random code generator backed by a single seeded RNG.
///
/// The RNG is seeded once when the generator is built and then shared by every
/// caller, so rapid successive calls draw from one continuous stream instead of
/// restarting from a clock-derived seed.
///
/// # Examples
///
/// ```
/// use url_registry::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
///
/// let generator = RandomCodeGenerator::new();
/// let code = generator.generate();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub struct RandomCodeGenerator {
    rng: Mutex<StdRng>,
}

impl RandomCodeGenerator {
    /// Creates a generator seeded from the operating system's entropy source.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a generator with a fixed seed. Output is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        // A panic while holding the lock cannot leave the RNG in a bad state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        (0..CODE_LENGTH)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Returns `true` if `code` collides with a fixed route.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Returns `true` if `code` has the exact shape of a generated code.
pub fn is_well_formed(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_62_unique_chars() {
        let unique: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 62);
        assert!(ALPHABET.iter().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_code_has_correct_length() {
        let generator = RandomCodeGenerator::new();
        for _ in 0..100 {
            assert_eq!(generator.generate().len(), CODE_LENGTH);
        }
    }

    #[test]
    fn test_generate_code_uses_alphabet_only() {
        let generator = RandomCodeGenerator::new();
        for _ in 0..1000 {
            let code = generator.generate();
            assert!(is_well_formed(&code), "unexpected code {code}");
        }
    }

    #[test]
    fn test_rapid_calls_do_not_repeat() {
        let generator = RandomCodeGenerator::new();
        let codes: HashSet<_> = (0..1000).map(|_| generator.generate()).collect();

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_seeded_generators_are_reproducible() {
        let a = RandomCodeGenerator::with_seed(42);
        let b = RandomCodeGenerator::with_seed(42);

        for _ in 0..10 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_seeded_generator_advances() {
        let generator = RandomCodeGenerator::with_seed(7);
        let first = generator.generate();
        let second = generator.generate();

        assert_ne!(first, second);
    }

    #[test]
    fn test_all_alphabet_chars_are_reachable() {
        let generator = RandomCodeGenerator::with_seed(1);
        let mut seen = HashSet::new();

        for _ in 0..2000 {
            seen.extend(generator.generate().bytes());
        }

        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn test_shared_generator_across_threads() {
        let generator = std::sync::Arc::new(RandomCodeGenerator::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let generator = generator.clone();
                std::thread::spawn(move || {
                    (0..250).map(|_| generator.generate()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            all.extend(handle.join().unwrap());
        }

        assert_eq!(all.len(), 1000);
    }

    #[test]
    fn test_reserved_codes() {
        for &reserved in RESERVED_CODES {
            assert!(is_reserved(reserved));
            assert!(
                is_well_formed(reserved),
                "Reserved code '{}' should be in the code space",
                reserved
            );
        }
        assert!(!is_reserved("aB3xY9"));
    }

    #[test]
    fn test_is_well_formed() {
        assert!(is_well_formed("aB3xY9"));
        assert!(!is_well_formed("short"));
        assert!(!is_well_formed("toolong1"));
        assert!(!is_well_formed("ab-_cd"));
        assert!(!is_well_formed(""));
    }
}
