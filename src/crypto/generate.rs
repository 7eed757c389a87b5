//! Random password generation
//!
//! Alphabets are written the way `tr` takes character sets: `a-z` is a range,
//! anything else is a literal. A `-` that does not sit between two characters
//! is itself a literal, so `_A-Z-a-z-0-9` is letters, digits, `_` and `-`.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use crate::error::{PaError, PaResult};

use super::Secret;

/// Expand a `tr`-style pattern into its distinct characters, in first-seen order
pub fn parse_pattern(pattern: &str) -> PaResult<Vec<char>> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut alphabet: Vec<char> = Vec::new();
    let mut push = |c: char| {
        if !alphabet.contains(&c) {
            alphabet.push(c);
        }
    };

    let mut i = 0;
    while i < chars.len() {
        if i + 2 < chars.len() && chars[i + 1] == '-' {
            let (start, end) = (chars[i], chars[i + 2]);
            if start > end {
                return Err(PaError::Validation(format!(
                    "Invalid range '{}-{}' in password pattern",
                    start, end
                )));
            }
            (start..=end).for_each(&mut push);
            i += 3;
        } else {
            push(chars[i]);
            i += 1;
        }
    }

    if alphabet.is_empty() {
        return Err(PaError::Validation("Password pattern is empty".into()));
    }
    if alphabet.iter().any(|c| c.is_control()) {
        return Err(PaError::Validation(
            "Password pattern contains control characters".into(),
        ));
    }
    Ok(alphabet)
}

/// Generate a password from the operating system's random source
pub fn random_password(length: usize, alphabet: &[char]) -> PaResult<Secret> {
    random_password_with(&mut OsRng, length, alphabet)
}

/// Generate a password from a caller-supplied cryptographic RNG
pub fn random_password_with<R>(rng: &mut R, length: usize, alphabet: &[char]) -> PaResult<Secret>
where
    R: Rng + CryptoRng + ?Sized,
{
    if length == 0 {
        return Err(PaError::Validation(
            "Password length must be greater than zero".into(),
        ));
    }
    if alphabet.is_empty() {
        return Err(PaError::Validation("Password alphabet is empty".into()));
    }

    let password: String = (0..length)
        .filter_map(|_| alphabet.choose(rng).copied())
        .collect();
    Ok(Secret::new(password))
}
