//! Error types for coindcx-crypto

use thiserror::Error;

/// Result type for signing operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in cryptographic operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The secret key was rejected by the MAC implementation
    #[error("Invalid secret key: {0}")]
    InvalidSecretKey(String),
}
