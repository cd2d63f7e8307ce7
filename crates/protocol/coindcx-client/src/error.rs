//! Error types for the CoinDCX client.

use coindcx_crypto::CryptoError;
use coindcx_types::ErrorCode;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to CoinDCX.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Authenticated call attempted without an API key and/or secret.
    #[error(
        "CoinDCX API credentials not found; missing {}",
        .missing.join(", ")
    )]
    MissingCredentials {
        /// Names of the missing settings.
        missing: Vec<&'static str>,
    },

    /// Signing the request failed.
    #[error("failed to sign request: {0}")]
    Signing(#[from] CryptoError),

    /// The exchange answered with a non-2xx status.
    #[error("HTTP {status} from {url}: {body}")]
    UpstreamHttp {
        /// HTTP status code
        status: u16,
        /// Request URL including query string
        url: String,
        /// Raw response body
        body: String,
    },

    /// The exchange answered with something that is not JSON.
    #[error("invalid response from {url}: {reason}")]
    InvalidResponse {
        /// Request URL
        url: String,
        /// Parse failure
        reason: String,
    },

    /// No market in `markets_details` matches the requested pair.
    #[error("Trading pair '{0}' not found")]
    MarketNotFound(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Connection, TLS or protocol failure.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Payload serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Get the error code reported to MCP clients.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingCredentials { .. } => ErrorCode::MissingCredentials,
            Self::Signing(_) => ErrorCode::InvalidCredentials,
            Self::UpstreamHttp { .. } => ErrorCode::UpstreamHttp,
            Self::InvalidResponse { .. } => ErrorCode::InvalidResponse,
            Self::MarketNotFound(_) => ErrorCode::MarketNotFound,
            Self::Timeout(_) => ErrorCode::Timeout,
            Self::Http(_) => ErrorCode::NetworkError,
            Self::Serialization(_) => ErrorCode::InternalError,
        }
    }

    /// HTTP status of an upstream failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UpstreamHttp { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_message_lists_fields() {
        let err = ClientError::MissingCredentials {
            missing: vec!["COINDCX_API_KEY", "COINDCX_SECRET_KEY"],
        };
        let msg = err.to_string();
        assert!(msg.ends_with("missing COINDCX_API_KEY, COINDCX_SECRET_KEY"));
        assert_eq!(err.error_code(), ErrorCode::MissingCredentials);
    }

    #[test]
    fn test_upstream_error_preserves_body() {
        let err = ClientError::UpstreamHttp {
            status: 401,
            url: "https://api.coindcx.com/exchange/v1/users/balances".into(),
            body: r#"{"code":401,"message":"Invalid credentials"}"#.into(),
        };
        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().contains("Invalid credentials"));
        assert_eq!(err.error_code(), ErrorCode::UpstreamHttp);
    }

    #[test]
    fn test_market_not_found_message() {
        let err = ClientError::MarketNotFound("FOOBAR".into());
        assert_eq!(err.to_string(), "Trading pair 'FOOBAR' not found");
        assert_eq!(err.status(), None);
    }
}
