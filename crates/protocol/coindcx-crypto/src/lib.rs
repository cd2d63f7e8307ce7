//! Request signing for the CoinDCX private API.
//!
//! Every authenticated request is signed with HMAC-SHA256 over the compact
//! JSON body followed by the request timestamp:
//!
//! ```text
//! signature = hex(HMAC_SHA256(secret_key, payload_json || decimal(timestamp_ms)))
//! ```
//!
//! # Example
//!
//! ```
//! use coindcx_crypto::{Credentials, RequestSigner};
//!
//! let signer = RequestSigner::new(Credentials::new("key", "s"));
//! let signature = signer.sign(br#"{"a":1}"#, 1_700_000_000_000).unwrap();
//! assert_eq!(signature.len(), 64);
//! assert!(signer.verify(br#"{"a":1}"#, 1_700_000_000_000, &signature));
//! ```

mod error;
mod signature;

pub use error::{CryptoError, CryptoResult};
pub use signature::{sign, signing_message, verify, AuthHeaders, RequestSigner};

use zeroize::{Zeroize, ZeroizeOnDrop};

/// The secret half of an API credential.
///
/// Implements Zeroize + ZeroizeOnDrop to clear key material from memory.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(String);

impl SecretKey {
    /// Wrap a secret key string.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Raw key bytes used as the HMAC key.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// API key plus secret key.
///
/// Immutable once constructed; the adapter builds it once at startup.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    secret_key: SecretKey,
}

impl Credentials {
    /// Create credentials from the public API key and the signing secret.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: SecretKey::new(secret_key),
        }
    }

    /// The public API key sent in `X-AUTH-APIKEY`.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The signing secret.
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &self.secret_key)
            .finish()
    }
}
