//! Utilities for generating passwords.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use crate::{Secret, VaultError, VaultErrorRepr};

pub static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub static DIGITS: &str = "0123456789";
/// The 32 printable ASCII punctuation symbols.
pub static PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

pub const DEFAULT_LENGTH: usize = 12;
/// Smallest length front-ends offer; [`generate_password`] itself accepts any length above zero.
pub const MIN_UI_LENGTH: usize = 4;
/// Largest length front-ends offer.
pub const MAX_UI_LENGTH: usize = 50;

/// Letters, digits and punctuation: 94 symbols in all.
pub fn default_alphabet() -> Vec<char> {
    let mut abc = Vec::with_capacity(94);
    abc.extend(LOWERCASE.chars());
    abc.extend(UPPERCASE.chars());
    abc.extend(DIGITS.chars());
    abc.extend(PUNCTUATION.chars());
    abc
}

/// Generate a password of `len` characters drawn from [`default_alphabet`], using the
/// thread-local CSPRNG.
pub fn generate_password(len: usize) -> Result<Secret, VaultError> {
    if len == 0 {
        return Err(VaultErrorRepr::InvalidLength.into());
    }
    let mut rng = rand::thread_rng();
    Ok(generate_random_password(&mut rng, &default_alphabet(), len))
}

/// Generate a simple, impossible-to-guess password by just randomly sampling the given alphabet.
///
/// Every character is chosen independently, with replacement. `rand`'s uniform sampler re-samples
/// rather than reducing modulo the alphabet size, so there's no bias toward the start of the
/// alphabet.
///
/// # Panics
///
/// If `alphabet` is empty.
pub fn generate_random_password<R>(rng: &mut R, alphabet: &[char], len: usize) -> Secret
where
    R: Rng + CryptoRng,
{
    assert!(!alphabet.is_empty(), "cannot generate a password from an empty alphabet");
    let mut password = String::with_capacity(len);
    for _ in 0..len {
        if let Some(ch) = alphabet.choose(rng) {
            password.push(*ch);
        }
    }
    Secret::from(password)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_default_alphabet() {
        let alphabet = default_alphabet();
        assert_eq!(alphabet.len(), 94);
        let unique = alphabet.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), 94);
        assert!(PUNCTUATION.chars().all(|c| c.is_ascii_punctuation()));
        assert_eq!(PUNCTUATION.len(), 32);
    }

    #[test]
    fn test_lengths_and_alphabet() {
        let alphabet = default_alphabet();
        for len in MIN_UI_LENGTH..=MAX_UI_LENGTH {
            let password = generate_password(len).unwrap();
            assert_eq!(password.as_str().chars().count(), len);
            assert!(password.as_str().chars().all(|c| alphabet.contains(&c)));
        }
    }

    #[test]
    fn test_lengths_outside_ui_range() {
        assert_eq!(generate_password(1).unwrap().as_str().len(), 1);
        assert_eq!(generate_password(3).unwrap().as_str().len(), 3);
        assert_eq!(generate_password(200).unwrap().as_str().len(), 200);
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let err = generate_password(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLength);
    }

    #[test]
    fn test_successive_passwords_differ() {
        let first = generate_password(DEFAULT_LENGTH).unwrap();
        let second = generate_password(DEFAULT_LENGTH).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_every_symbol_shows_up() {
        // 94 * 200 draws; missing any one symbol has probability around 94 * e^-200.
        let password = generate_password(94 * 200).unwrap();
        let seen = password.as_str().chars().collect::<HashSet<_>>();
        assert_eq!(seen.len(), 94);
    }

    #[test]
    fn test_custom_alphabet() {
        let mut rng = rand::rngs::OsRng;
        let password = generate_random_password(&mut rng, &['x', 'y'], 32);
        assert_eq!(password.as_str().len(), 32);
        assert!(password.as_str().chars().all(|c| c == 'x' || c == 'y'));
    }
}
