//! Client configuration.
//!
//! The binary fills this from flags and `COINDCX_*` environment variables.
//! Credentials are optional here: public endpoints work without them and
//! authenticated endpoints report the missing fields.

use std::time::Duration;

use coindcx_crypto::Credentials;
use coindcx_types::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, PUBLIC_MARKET_DATA_URL};

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "COINDCX_API_KEY";
/// Environment variable holding the secret key.
pub const ENV_SECRET_KEY: &str = "COINDCX_SECRET_KEY";
/// Environment variable overriding the primary API host.
pub const ENV_BASE_URL: &str = "COINDCX_BASE_URL";
/// Environment variable enabling sandbox mode.
pub const ENV_SANDBOX_MODE: &str = "COINDCX_SANDBOX_MODE";
/// Environment variable overriding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "COINDCX_TIMEOUT_SECS";

/// Configuration for [`crate::CoinDcxClient`].
#[derive(Clone)]
pub struct ClientConfig {
    /// Public API key.
    pub api_key: Option<String>,
    /// Signing secret.
    pub secret_key: Option<String>,
    /// Primary API host.
    pub base_url: String,
    /// Market-data host. Fixed in production; replaced only by test harnesses.
    pub market_data_url: String,
    /// Sandbox flag (reported, does not change hosts).
    pub sandbox_mode: bool,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            secret_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            market_data_url: PUBLIC_MARKET_DATA_URL.to_string(),
            sandbox_mode: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Set both credentials.
    pub fn with_credentials(mut self, api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Override the primary API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Point market-data requests somewhere other than `public.coindcx.com`.
    pub fn with_market_data_url(mut self, market_data_url: impl Into<String>) -> Self {
        self.market_data_url = market_data_url.into();
        self
    }

    pub fn with_sandbox_mode(mut self, sandbox_mode: bool) -> Self {
        self.sandbox_mode = sandbox_mode;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Names of the required settings that are absent or empty.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.api_key) {
            missing.push(ENV_API_KEY);
        }
        if is_blank(&self.secret_key) {
            missing.push(ENV_SECRET_KEY);
        }
        missing
    }

    /// Build credentials, or return the list of missing settings.
    pub fn credentials(&self) -> Result<Credentials, Vec<&'static str>> {
        match (&self.api_key, &self.secret_key) {
            (Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty() => {
                Ok(Credentials::new(key.clone(), secret.clone()))
            }
            _ => Err(self.missing_credentials()),
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::is_empty).unwrap_or(true)
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("market_data_url", &self.market_data_url)
            .field("sandbox_mode", &self.sandbox_mode)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.coindcx.com");
        assert_eq!(config.market_data_url, "https://public.coindcx.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.sandbox_mode);
    }

    #[test]
    fn test_missing_both() {
        let config = ClientConfig::default();
        assert_eq!(
            config.missing_credentials(),
            vec!["COINDCX_API_KEY", "COINDCX_SECRET_KEY"]
        );
        assert!(config.credentials().is_err());
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let config = ClientConfig::default().with_credentials("key", "");
        assert_eq!(config.missing_credentials(), vec!["COINDCX_SECRET_KEY"]);
        assert_eq!(config.credentials().unwrap_err(), vec!["COINDCX_SECRET_KEY"]);
    }

    #[test]
    fn test_complete_credentials() {
        let config = ClientConfig::default().with_credentials("key", "secret");
        assert!(config.missing_credentials().is_empty());
        assert_eq!(config.credentials().unwrap().api_key(), "key");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ClientConfig::default().with_credentials("key", "top-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("top-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
