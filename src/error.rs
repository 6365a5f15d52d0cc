//! Error types for passcipher

use thiserror::Error;

/// Main error type for cipher operations
#[derive(Error, Debug)]
pub enum CipherError {
    /// The block cipher could not be constructed from the supplied key/IV
    #[error("Cipher setup error: {0}")]
    CipherSetup(String),

    /// Ciphertext could not be decrypted.
    ///
    /// Wrong credentials and corrupted ciphertext are indistinguishable
    /// without an integrity tag, so both end up here.
    #[error("data could not be decrypted - bad salt/pass")]
    DecryptionFailed,

    /// Trailing padding length is out of range
    #[error("unexpected padding size")]
    InvalidPadding,

    /// Decrypted bytes are not valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

impl From<cbc::cipher::InvalidLength> for CipherError {
    fn from(err: cbc::cipher::InvalidLength) -> Self {
        CipherError::CipherSetup(err.to_string())
    }
}

/// Result type alias for cipher operations
pub type Result<T> = std::result::Result<T, CipherError>;
