//! Key derivation for AES-256 encryption
//!
//! Implements OpenSSL's `EVP_BytesToKey` with an iteration count of 1:
//!
//! ```text
//! D_0 = ""
//! D_i = H(D_{i-1} || passphrase || salt)
//! key || iv = D_1 || D_2 || ...   (truncated to 48 bytes)
//! ```
//!
//! The salt is used in full; it is neither truncated nor padded to 8 bytes.

use std::fmt;

use md5::{Digest, Md5};
use sha2::Sha256;

/// Key length for AES-256 (32 bytes = 256 bits)
pub const KEY_LENGTH: usize = 32;

/// IV size for AES-CBC (16 bytes = 128 bits)
pub const IV_LENGTH: usize = 16;

/// Digest used by the key derivation rounds.
///
/// Both variants produce the same key/IV layout but are not wire-compatible
/// with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyDigest {
    /// MD5, 16 bytes per round. Matches `openssl enc -md md5`.
    #[default]
    Md5,
    /// SHA-256, 32 bytes per round.
    Sha256,
}

impl KeyDigest {
    /// Bytes produced by one derivation round
    pub fn output_size(self) -> usize {
        match self {
            KeyDigest::Md5 => <Md5 as Digest>::output_size(),
            KeyDigest::Sha256 => <Sha256 as Digest>::output_size(),
        }
    }
}

/// Derived AES key and IV. Lives only for the duration of one call.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    pub key: [u8; KEY_LENGTH],
    pub iv: [u8; IV_LENGTH],
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("key", &"<redacted>")
            .field("iv", &"<redacted>")
            .finish()
    }
}

/// Derive key and IV from salt and passphrase with the given digest.
///
/// Never fails; empty salt and empty passphrase are both valid.
///
/// # Example
///
/// ```
/// use passcipher::crypto::{derive_key, KeyDigest};
///
/// let a = derive_key(b"salt1234", b"encpass1", KeyDigest::Md5);
/// let b = derive_key(b"salt1234", b"encpass1", KeyDigest::Md5);
/// assert_eq!(a, b);
/// ```
pub fn derive_key(salt: &[u8], passphrase: &[u8], digest: KeyDigest) -> KeyMaterial {
    log::trace!("deriving key material with {:?}", digest);
    match digest {
        KeyDigest::Md5 => bytes_to_key::<Md5>(salt, passphrase),
        KeyDigest::Sha256 => bytes_to_key::<Sha256>(salt, passphrase),
    }
}

/// `EVP_BytesToKey` over an arbitrary digest
pub fn bytes_to_key<D: Digest>(salt: &[u8], passphrase: &[u8]) -> KeyMaterial {
    let needed = KEY_LENGTH + IV_LENGTH;
    let mut material = Vec::with_capacity(needed + <D as Digest>::output_size());
    let mut previous: Vec<u8> = Vec::new();

    while material.len() < needed {
        let round = D::new()
            .chain_update(&previous)
            .chain_update(passphrase)
            .chain_update(salt)
            .finalize();
        previous.clear();
        previous.extend_from_slice(&round);
        material.extend_from_slice(&round);
    }

    let mut key = [0u8; KEY_LENGTH];
    let mut iv = [0u8; IV_LENGTH];
    key.copy_from_slice(&material[..KEY_LENGTH]);
    iv.copy_from_slice(&material[KEY_LENGTH..needed]);

    KeyMaterial { key, iv }
}
