//! PKCS#5/PKCS#7 style block padding
//!
//! Padding is always added: a message that is already block aligned gains a
//! whole extra block, so the last byte of a padded buffer is always a
//! padding length.

use crate::error::{CipherError, Result};

/// Pad `data` to a multiple of `block_size`.
///
/// Every appended byte equals the number of bytes appended, which is in
/// `1..=block_size`.
///
/// # Panics
///
/// If `block_size` is zero or does not fit in a byte.
///
/// # Example
///
/// ```
/// use passcipher::crypto::pad;
///
/// let padded = pad(b"mypassword".to_vec(), 16);
/// assert_eq!(padded.len(), 16);
/// assert_eq!(padded[15], 6);
/// ```
pub fn pad(mut data: Vec<u8>, block_size: usize) -> Vec<u8> {
    assert!(
        (1..=u8::MAX as usize).contains(&block_size),
        "block size must be between 1 and 255"
    );
    let padding = block_size - data.len() % block_size;
    data.resize(data.len() + padding, padding as u8);
    data
}

/// Strip padding added by [`pad`].
///
/// Only the claimed padding length is checked: it must fit inside the buffer
/// and be no larger than `block_size`. The padding bytes themselves are not
/// compared. A buffer made entirely of padding unpads to an empty slice.
pub fn unpad(data: &[u8], block_size: usize) -> Result<&[u8]> {
    let Some(&last) = data.last() else {
        return Err(CipherError::InvalidPadding);
    };
    let padding = last as usize;
    if padding > data.len() || padding > block_size {
        return Err(CipherError::InvalidPadding);
    }
    Ok(&data[..data.len() - padding])
}
