//! Salt, passphrase and digest bundled into a reusable cipher configuration

use std::fmt;

use rand::{CryptoRng, Rng};

use crate::crypto::{self, KeyDigest, KeyMaterial};
use crate::error::Result;
use crate::{DEFAULT_PASSPHRASE_LENGTH, DEFAULT_SALT_LENGTH};

/// Everything needed to encrypt or decrypt: salt, passphrase and the digest
/// used to derive the AES key from them.
///
/// The same params must be used on both sides; nothing about them is stored
/// in the ciphertext.
///
/// # Example
///
/// ```
/// use passcipher::{CipherParams, KeyDigest};
///
/// let params = CipherParams::new("salt1234", "encpass1");
/// let encrypted = params.encrypt(b"mypassword").unwrap();
/// assert_eq!(params.decrypt(&encrypted).unwrap(), b"mypassword");
///
/// // Ciphertexts from the SHA-256 derivation need the same digest to open
/// let legacy = CipherParams::new("salt1", "encpass1").with_digest(KeyDigest::Sha256);
/// assert_eq!(legacy.encrypt(b"mypassword").unwrap().len(), 16);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CipherParams {
    salt: String,
    passphrase: String,
    digest: KeyDigest,
}

impl CipherParams {
    /// Params with the default ([`KeyDigest::Md5`]) derivation
    pub fn new(salt: impl Into<String>, passphrase: impl Into<String>) -> Self {
        Self {
            salt: salt.into(),
            passphrase: passphrase.into(),
            digest: KeyDigest::default(),
        }
    }

    /// Fresh random salt and passphrase
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Fresh random salt and passphrase from the given generator
    pub fn generate_with<R>(rng: &mut R) -> Self
    where
        R: Rng + CryptoRng + ?Sized,
    {
        let salt = crypto::random_string_with(rng, DEFAULT_SALT_LENGTH);
        let passphrase = crypto::random_string_with(rng, DEFAULT_PASSPHRASE_LENGTH);
        Self::new(salt, passphrase)
    }

    #[must_use]
    pub fn with_digest(mut self, digest: KeyDigest) -> Self {
        self.digest = digest;
        self
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    pub fn digest(&self) -> KeyDigest {
        self.digest
    }

    /// Derive the AES key and IV for these params
    pub fn key_material(&self) -> KeyMaterial {
        crypto::derive_key(self.salt.as_bytes(), self.passphrase.as_bytes(), self.digest)
    }

    /// Encrypt a copy of `data`
    pub fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        let km = self.key_material();
        crypto::encrypt_with_key(data, &km.key, &km.iv)
    }

    /// Decrypt a copy of `data`.
    ///
    /// Returns [`CipherError::DecryptionFailed`](crate::CipherError::DecryptionFailed)
    /// for empty input, wrong credentials (most of the time) or corrupted data.
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        let km = self.key_material();
        crypto::decrypt_with_key(data, &km.key, &km.iv)
    }

    pub fn encrypt_str(&self, data: &str) -> Result<Vec<u8>> {
        self.encrypt(data.as_bytes())
    }

    /// Decrypt and interpret the plaintext as UTF-8
    pub fn decrypt_to_string(&self, data: &[u8]) -> Result<String> {
        let plaintext = self.decrypt(data)?;
        Ok(String::from_utf8(plaintext)?)
    }
}

impl fmt::Debug for CipherParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherParams")
            .field("salt", &"<redacted>")
            .field("passphrase", &"<redacted>")
            .field("digest", &self.digest)
            .finish()
    }
}
