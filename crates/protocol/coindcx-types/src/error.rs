//! Error codes surfaced to MCP clients.
//!
//! Every failed tool call carries one of these codes together with a
//! human-readable message and a recovery suggestion.

use serde::{Deserialize, Serialize};

/// Adapter error codes.
///
/// Codes are grouped by origin:
/// - `0x01xx` configuration
/// - `0x02xx` upstream exchange responses
/// - `0x03xx` transport
/// - `0x04xx` invocation
/// - `0xFFxx` internal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
#[non_exhaustive]
pub enum ErrorCode {
    // =========================================================================
    // Configuration Errors (0x0100 - 0x01FF)
    // =========================================================================
    /// API key or secret key not configured
    MissingCredentials = 0x0100,
    /// Secret key cannot be used for signing
    InvalidCredentials = 0x0101,

    // =========================================================================
    // Upstream Errors (0x0200 - 0x02FF)
    // =========================================================================
    /// Exchange answered with a non-2xx status
    UpstreamHttp = 0x0200,
    /// Exchange answered with a body that is not JSON
    InvalidResponse = 0x0201,
    /// Requested market is not listed
    MarketNotFound = 0x0202,

    // =========================================================================
    // Transport Errors (0x0300 - 0x03FF)
    // =========================================================================
    /// Request exceeded the per-request timeout
    Timeout = 0x0300,
    /// Connection or protocol failure
    NetworkError = 0x0301,

    // =========================================================================
    // Invocation Errors (0x0400 - 0x04FF)
    // =========================================================================
    /// Tool arguments are outside their accepted range
    InvalidArguments = 0x0400,

    // =========================================================================
    // Internal (0xFF00 - 0xFFFF)
    // =========================================================================
    /// Unexpected internal failure
    InternalError = 0xFFFF,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Returns true if the failure originated at the exchange.
    pub fn is_upstream_error(&self) -> bool {
        (0x0200..=0x02FF).contains(&self.code())
    }

    /// Get a user-friendly suggestion for recovering from this error.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::MissingCredentials => {
                "Set COINDCX_API_KEY and COINDCX_SECRET_KEY and restart the server."
            }
            Self::InvalidCredentials => "Check that COINDCX_SECRET_KEY is the secret issued with the API key.",
            Self::UpstreamHttp => "Inspect the exchange response body; check the pair, order id and parameters.",
            Self::InvalidResponse => "The exchange returned an unexpected payload. Retry later.",
            Self::MarketNotFound => "Use get_markets to list valid trading pairs.",
            Self::Timeout => "The exchange did not answer in time. Retry the call.",
            Self::NetworkError => "Check network connectivity to the CoinDCX API.",
            Self::InvalidArguments => "Check the tool's input schema for accepted ranges.",
            Self::InternalError => "This is an internal error; please report it.",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::MissingCredentials => write!(f, "MISSING_CREDENTIALS"),
            ErrorCode::InvalidCredentials => write!(f, "INVALID_CREDENTIALS"),
            ErrorCode::UpstreamHttp => write!(f, "UPSTREAM_HTTP_ERROR"),
            ErrorCode::InvalidResponse => write!(f, "INVALID_RESPONSE"),
            ErrorCode::MarketNotFound => write!(f, "MARKET_NOT_FOUND"),
            ErrorCode::Timeout => write!(f, "TIMEOUT"),
            ErrorCode::NetworkError => write!(f, "NETWORK_ERROR"),
            ErrorCode::InvalidArguments => write!(f, "INVALID_ARGUMENTS"),
            ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::MissingCredentials.code(), 0x0100);
        assert_eq!(ErrorCode::UpstreamHttp.code(), 0x0200);
        assert_eq!(ErrorCode::InvalidArguments.code(), 0x0400);
        assert_eq!(ErrorCode::InternalError.code(), 0xFFFF);
    }

    #[test]
    fn test_upstream_classification() {
        assert!(ErrorCode::UpstreamHttp.is_upstream_error());
        assert!(ErrorCode::MarketNotFound.is_upstream_error());
        assert!(!ErrorCode::Timeout.is_upstream_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::UpstreamHttp.to_string(), "UPSTREAM_HTTP_ERROR");
        assert_eq!(ErrorCode::MissingCredentials.to_string(), "MISSING_CREDENTIALS");
    }

    #[test]
    fn test_suggestions_present() {
        assert!(ErrorCode::MissingCredentials
            .suggestion()
            .contains("COINDCX_API_KEY"));
        assert!(!ErrorCode::InternalError.suggestion().is_empty());
    }
}
