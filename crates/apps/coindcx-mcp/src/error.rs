//! Error types for the MCP server.

use coindcx_client::ClientError;
use coindcx_types::ErrorCode;
use thiserror::Error;

/// Result type for MCP operations.
pub type McpResult<T> = Result<T, McpError>;

/// Error types for MCP server operations.
#[derive(Debug, Error)]
pub enum McpError {
    /// Exchange client failure.
    #[error("{0}")]
    Client(#[from] ClientError),

    /// Tool arguments outside their accepted range.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

impl McpError {
    /// Get the error code reported to MCP clients.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Client(e) => e.error_code(),
            Self::InvalidArguments(_) => ErrorCode::InvalidArguments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_keeps_message_and_code() {
        let err = McpError::from(ClientError::MarketNotFound("XYZ".to_string()));
        assert_eq!(err.to_string(), "Trading pair 'XYZ' not found");
        assert_eq!(err.error_code(), ErrorCode::MarketNotFound);
    }

    #[test]
    fn test_invalid_arguments_error() {
        let err = McpError::InvalidArguments("limit must be between 1 and 5000, got 0".into());
        assert_eq!(
            err.to_string(),
            "invalid arguments: limit must be between 1 and 5000, got 0"
        );
        assert_eq!(err.error_code(), ErrorCode::InvalidArguments);
    }
}
