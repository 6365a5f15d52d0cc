//! # passcipher
//!
//! Encrypt small blobs with a salt and a human-supplied passphrase.
//!
//! ## Features
//!
//! - AES-256-CBC with PKCS#7 style padding (always at least one pad byte)
//! - Key and IV derived with OpenSSL's `EVP_BytesToKey` (MD5 by default,
//!   SHA-256 selectable)
//! - Raw ciphertext: no header, no embedded salt or IV
//! - Random salt/passphrase generation
//!
//! There is no authentication tag. A wrong salt or passphrase is usually
//! reported as [`CipherError::DecryptionFailed`], but tampered or mismatched
//! input can also decrypt to garbage. Do not use this where tamper detection
//! matters.
//!
//! ## Example
//!
//! ```
//! use passcipher::{decrypt_bytes, encrypt_string, random_string};
//!
//! let salt = random_string(8);
//! let encrypted = encrypt_string("mypassword", &salt, "encpass1").unwrap();
//! let decrypted = decrypt_bytes(&encrypted, &salt, "encpass1").unwrap();
//! assert_eq!(decrypted, b"mypassword");
//! ```

pub mod crypto;
pub mod error;
pub mod params;

// Re-export main types
pub use crypto::{KeyDigest, KeyMaterial, random_string};
pub use error::{CipherError, Result};
pub use params::CipherParams;

/// Salt length used by [`CipherParams::generate`]
pub const DEFAULT_SALT_LENGTH: usize = 8;

/// Passphrase length used by [`CipherParams::generate`]
pub const DEFAULT_PASSPHRASE_LENGTH: usize = 32;

/// Encrypt `data` with a key derived from `salt` and `passphrase`.
///
/// The caller's buffer is never modified. Identical arguments always give
/// identical ciphertext.
pub fn encrypt_bytes(data: &[u8], salt: &str, passphrase: &str) -> Result<Vec<u8>> {
    CipherParams::new(salt, passphrase).encrypt(data)
}

/// Decrypt `data` produced by [`encrypt_bytes`] with the same salt and
/// passphrase.
pub fn decrypt_bytes(data: &[u8], salt: &str, passphrase: &str) -> Result<Vec<u8>> {
    CipherParams::new(salt, passphrase).decrypt(data)
}

/// Encrypt the UTF-8 bytes of `data`
pub fn encrypt_string(data: &str, salt: &str, passphrase: &str) -> Result<Vec<u8>> {
    encrypt_bytes(data.as_bytes(), salt, passphrase)
}

/// Decrypt ciphertext carried in a string, byte for byte
pub fn decrypt_string(data: &str, salt: &str, passphrase: &str) -> Result<Vec<u8>> {
    decrypt_bytes(data.as_bytes(), salt, passphrase)
}
