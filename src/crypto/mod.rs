//! Cryptographic operations for passcipher
//!
//! AES-256-CBC with PKCS#7 style padding, keyed by OpenSSL's
//! `EVP_BytesToKey` derivation over a salt and passphrase.

mod aes;
mod key;
mod padding;
mod random;

pub use aes::{BLOCK_SIZE, decrypt_with_key, encrypt_with_key};
pub use key::{IV_LENGTH, KEY_LENGTH, KeyDigest, KeyMaterial, bytes_to_key, derive_key};
pub use padding::{pad, unpad};
pub use random::{RANDOM_CHAR_COUNT, RANDOM_CHAR_FIRST, random_string, random_string_with};
