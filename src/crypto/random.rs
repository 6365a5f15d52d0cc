//! Random salt and passphrase generation
//!
//! Characters are drawn uniformly from ASCII `A` (65) through `y` (121):
//! upper case letters, `[\]^_` and a backtick, then lower case `a` to `y`.

use rand::{CryptoRng, Rng};

/// First character code of the random charset
pub const RANDOM_CHAR_FIRST: u8 = b'A';

/// Number of distinct characters in the random charset
pub const RANDOM_CHAR_COUNT: u8 = 57;

/// Generate a random string of `length` characters using the thread-local
/// CSPRNG.
///
/// # Panics
///
/// If the operating system entropy source fails; there is no fallback.
///
/// # Example
///
/// ```
/// use passcipher::random_string;
///
/// let salt = random_string(8);
/// assert_eq!(salt.len(), 8);
/// ```
pub fn random_string(length: usize) -> String {
    random_string_with(&mut rand::rng(), length)
}

/// Generate a random string from a caller-supplied generator.
pub fn random_string_with<R>(rng: &mut R, length: usize) -> String
where
    R: Rng + CryptoRng + ?Sized,
{
    (0..length)
        .map(|_| (RANDOM_CHAR_FIRST + rng.random_range(0..RANDOM_CHAR_COUNT)) as char)
        .collect()
}
