//! AES-256-CBC encryption and decryption
//!
//! The engine works on raw key/IV slices and does its own padding (see
//! [`super::padding`]); the cipher itself runs with `NoPadding` over a
//! block-aligned copy of the input. There is no integrity tag: a wrong
//! key is only detected when the recovered padding length is implausible.

use aes::Aes256;
use block_padding::NoPadding;
use cbc::cipher::{BlockModeDecrypt, BlockModeEncrypt, KeyIvInit};
use cbc::{Decryptor, Encryptor};

use super::padding::{pad, unpad};
use crate::error::{CipherError, Result};

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;

type Aes256CbcEnc = Encryptor<Aes256>;
type Aes256CbcDec = Decryptor<Aes256>;

/// Encrypt `plaintext` with AES-256-CBC.
///
/// The input is copied and padded; the returned ciphertext is always one
/// to sixteen bytes longer than the plaintext.
///
/// # Errors
///
/// [`CipherError::CipherSetup`] if `key` is not 32 bytes or `iv` is not 16.
pub fn encrypt_with_key(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let encryptor = Aes256CbcEnc::new_from_slices(key, iv)?;

    let mut buffer = pad(plaintext.to_vec(), BLOCK_SIZE);
    let len = buffer.len();
    encryptor
        .encrypt_padded::<NoPadding>(&mut buffer, len)
        .map_err(|e| CipherError::CipherSetup(format!("Encryption failed: {:?}", e)))?;

    Ok(buffer)
}

/// Decrypt AES-256-CBC `ciphertext` and strip its padding.
///
/// # Errors
///
/// [`CipherError::CipherSetup`] for a malformed key or IV, and
/// [`CipherError::DecryptionFailed`] when the ciphertext is empty, not a
/// whole number of blocks, or its padding does not validate.
pub fn decrypt_with_key(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let decryptor = Aes256CbcDec::new_from_slices(key, iv)?;

    // Don't try to unpad an empty buffer
    if ciphertext.is_empty() {
        log::debug!("refusing to decrypt empty ciphertext");
        return Err(CipherError::DecryptionFailed);
    }

    let mut buffer = ciphertext.to_vec();
    let decrypted = decryptor.decrypt_padded::<NoPadding>(&mut buffer).map_err(|_| {
        log::debug!(
            "ciphertext length {} is not a multiple of {}",
            ciphertext.len(),
            BLOCK_SIZE
        );
        CipherError::DecryptionFailed
    })?;

    match unpad(decrypted, BLOCK_SIZE) {
        Ok(plaintext) => Ok(plaintext.to_vec()),
        Err(_) => {
            log::debug!("padding check failed after decryption");
            Err(CipherError::DecryptionFailed)
        }
    }
}
