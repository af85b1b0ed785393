//! Random password generation.
//!
//! Passwords are composed from three pools (letters, digits, and a fixed
//! symbol set) with per-pool counts drawn at random, then shuffled so no
//! pool clusters at either end of the result.

use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;

/// Uppercase and lowercase ASCII letters.
pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digits.
pub const DIGITS: &[u8] = b"0123456789";

/// The fixed punctuation set used for generated passwords.
pub const SYMBOLS: &[u8] = b"!#$%&()*+";

/// Composition rules for generated passwords.
///
/// Each field gives the inclusive range the per-pool character count is
/// drawn from. The default policy yields passwords of 12 to 18 characters.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// How many letters to include.
    pub letters: RangeInclusive<usize>,
    /// How many symbols to include.
    pub symbols: RangeInclusive<usize>,
    /// How many digits to include.
    pub digits: RangeInclusive<usize>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            letters: 8..=10,
            symbols: 2..=4,
            digits: 2..=4,
        }
    }
}

/// Generate a password with the default policy.
///
/// Uses `rand::thread_rng()`, which is cryptographically secure. Each call
/// is independent; there are no determinism guarantees.
pub fn generate_password() -> String {
    generate_with(&PasswordPolicy::default(), &mut rand::thread_rng())
}

/// Generate a password with an explicit policy and RNG.
///
/// Taking the RNG as a parameter keeps generation deterministic under a
/// seeded RNG, which the tests rely on.
pub fn generate_with<R: Rng>(policy: &PasswordPolicy, rng: &mut R) -> String {
    let mut chars = Vec::new();
    push_random(&mut chars, LETTERS, policy.letters.clone(), rng);
    push_random(&mut chars, SYMBOLS, policy.symbols.clone(), rng);
    push_random(&mut chars, DIGITS, policy.digits.clone(), rng);
    chars.shuffle(rng);
    chars.into_iter().map(char::from).collect()
}

/// Append a randomly drawn number of characters from `pool`.
fn push_random<R: Rng>(
    out: &mut Vec<u8>,
    pool: &[u8],
    count: RangeInclusive<usize>,
    rng: &mut R,
) {
    let n = rng.gen_range(count);
    out.extend((0..n).map(|_| pool[rng.gen_range(0..pool.len())]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn counts(password: &str) -> (usize, usize, usize) {
        let letters = password.bytes().filter(|b| LETTERS.contains(b)).count();
        let symbols = password.bytes().filter(|b| SYMBOLS.contains(b)).count();
        let digits = password.bytes().filter(|b| DIGITS.contains(b)).count();
        (letters, symbols, digits)
    }

    #[test]
    fn test_length_bounds() {
        for _ in 0..200 {
            let password = generate_password();
            assert!(password.len() >= 12, "too short: {}", password);
            assert!(password.len() <= 18, "too long: {}", password);
        }
    }

    #[test]
    fn test_composition_bounds() {
        for _ in 0..200 {
            let password = generate_password();
            let (letters, symbols, digits) = counts(&password);
            assert!((8..=10).contains(&letters), "letters in {}", password);
            assert!((2..=4).contains(&symbols), "symbols in {}", password);
            assert!((2..=4).contains(&digits), "digits in {}", password);
            assert_eq!(letters + symbols + digits, password.len());
        }
    }

    #[test]
    fn test_only_pool_characters() {
        for _ in 0..50 {
            let password = generate_password();
            for b in password.bytes() {
                assert!(
                    LETTERS.contains(&b) || SYMBOLS.contains(&b) || DIGITS.contains(&b),
                    "unexpected character {:?} in {}",
                    b as char,
                    password
                );
            }
        }
    }

    #[test]
    fn test_deterministic_under_seeded_rng() {
        let policy = PasswordPolicy::default();
        let a = generate_with(&policy, &mut StdRng::seed_from_u64(42));
        let b = generate_with(&policy, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_policy() {
        let policy = PasswordPolicy {
            letters: 4..=4,
            symbols: 1..=1,
            digits: 1..=1,
        };
        let password = generate_with(&policy, &mut StdRng::seed_from_u64(7));
        assert_eq!(password.len(), 6);
        let (letters, symbols, digits) = counts(&password);
        assert_eq!((letters, symbols, digits), (4, 1, 1));
    }
}
