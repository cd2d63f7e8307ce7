//! CLI argument definitions using clap.

use std::time::Duration;

use clap::Parser;
use coindcx_client::ClientConfig;
use coindcx_types::constants::DEFAULT_BASE_URL;

/// CoinDCX MCP server.
#[derive(Parser, Debug)]
#[command(name = "coindcx-mcp")]
#[command(version)]
#[command(about = "MCP server for the CoinDCX exchange API, served over stdio")]
#[command(
    long_about = "MCP server for the CoinDCX exchange API, served over stdio.\n\nSettings are read from flags, then COINDCX_* environment variables, then a .env file in the working directory."
)]
pub struct Cli {
    /// CoinDCX API key.
    #[arg(long, env = "COINDCX_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// CoinDCX secret key used to sign requests.
    #[arg(long, env = "COINDCX_SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Primary API host.
    #[arg(long, env = "COINDCX_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Mark the session as sandbox (reported only).
    #[arg(long, env = "COINDCX_SANDBOX_MODE")]
    pub sandbox: bool,

    /// Per-request timeout in seconds.
    #[arg(long, env = "COINDCX_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the client configuration from parsed arguments.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_key: self.api_key.clone(),
            secret_key: self.secret_key.clone(),
            base_url: self.base_url.clone(),
            sandbox_mode: self.sandbox,
            timeout: Duration::from_secs(self.timeout_secs),
            ..ClientConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_config() {
        let cli = Cli::try_parse_from([
            "coindcx-mcp",
            "--api-key",
            "k",
            "--secret-key",
            "s",
            "--base-url",
            "https://api.example.com",
            "--sandbox",
            "--timeout-secs",
            "5",
        ])
        .unwrap();

        let config = cli.client_config();
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.secret_key.as_deref(), Some("s"));
        assert_eq!(config.base_url, "https://api.example.com");
        assert!(config.sandbox_mode);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.market_data_url, "https://public.coindcx.com");
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
