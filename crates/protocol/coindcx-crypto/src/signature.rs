//! HMAC-SHA256 request signatures.
//!
//! The signed message is the exact request body bytes followed by the decimal
//! timestamp. The timestamp is not part of the body; the same value must be
//! used for signing and sent with the request.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{CryptoError, CryptoResult};
use crate::{Credentials, SecretKey};

type HmacSha256 = Hmac<Sha256>;

/// Build the byte string that gets signed.
///
/// # Algorithm
/// ```text
/// payload || decimal(timestamp_ms)
/// ```
pub fn signing_message(payload: &[u8], timestamp_ms: i64) -> Vec<u8> {
    let timestamp = timestamp_ms.to_string();
    let mut message = Vec::with_capacity(payload.len() + timestamp.len());
    message.extend_from_slice(payload);
    message.extend_from_slice(timestamp.as_bytes());
    message
}

fn mac_for(secret: &SecretKey, payload: &[u8], timestamp_ms: i64) -> CryptoResult<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| CryptoError::InvalidSecretKey(e.to_string()))?;
    mac.update(&signing_message(payload, timestamp_ms));
    Ok(mac)
}

/// Sign a serialized payload and timestamp.
///
/// Returns the signature as 64 lowercase hex characters.
///
/// # Example
/// ```
/// use coindcx_crypto::{sign, SecretKey};
///
/// let secret = SecretKey::new("s");
/// let signature = sign(&secret, br#"{"a":1}"#, 1_700_000_000_000).unwrap();
/// assert_eq!(
///     signature,
///     "ee9e27cb48db9c3b564ca287c53f71a1fcf174c2ebd892b8070030b58e84c7e5"
/// );
/// ```
pub fn sign(secret: &SecretKey, payload: &[u8], timestamp_ms: i64) -> CryptoResult<String> {
    let mac = mac_for(secret, payload, timestamp_ms)?;
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Verify a hex signature in constant time.
///
/// # Returns
/// `true` if the signature matches, `false` otherwise (including malformed hex).
pub fn verify(secret: &SecretKey, payload: &[u8], timestamp_ms: i64, signature: &str) -> bool {
    let Ok(expected) = hex::decode(signature) else {
        return false;
    };
    match mac_for(secret, payload, timestamp_ms) {
        Ok(mac) => mac.verify_slice(&expected).is_ok(),
        Err(_) => false,
    }
}

/// Values for the `X-AUTH-APIKEY` and `X-AUTH-SIGNATURE` headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub api_key: String,
    pub signature: String,
}

/// Signs request payloads with a fixed set of credentials.
#[derive(Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// The public API key.
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Sign a serialized payload and timestamp.
    pub fn sign(&self, payload: &[u8], timestamp_ms: i64) -> CryptoResult<String> {
        sign(self.credentials.secret_key(), payload, timestamp_ms)
    }

    /// Verify a signature produced by [`RequestSigner::sign`].
    pub fn verify(&self, payload: &[u8], timestamp_ms: i64, signature: &str) -> bool {
        verify(self.credentials.secret_key(), payload, timestamp_ms, signature)
    }

    /// Compute the authentication header pair for a request.
    pub fn auth_headers(&self, payload: &[u8], timestamp_ms: i64) -> CryptoResult<AuthHeaders> {
        Ok(AuthHeaders {
            api_key: self.credentials.api_key().to_string(),
            signature: self.sign(payload, timestamp_ms)?,
        })
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("api_key", &self.credentials.api_key())
            .finish()
    }
}
