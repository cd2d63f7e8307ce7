//! Exchange client and request dispatch.
//!
//! Three request modes, chosen by the calling operation:
//!
//! | Mode | Host | Auth |
//! |------|------|------|
//! | public | primary (`api.coindcx.com`) | none |
//! | public market data | `public.coindcx.com` | none |
//! | authenticated | primary | `X-AUTH-APIKEY` + `X-AUTH-SIGNATURE` |
//!
//! Every mode fails with [`ClientError::UpstreamHttp`] on a non-2xx status.
//! Nothing is retried.

use async_trait::async_trait;
use chrono::Utc;
use coindcx_crypto::RequestSigner;
use coindcx_types::constants::{HEADER_API_KEY, HEADER_SIGNATURE, HEADER_TIMESTAMP};
use coindcx_types::MarketDetails;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::pair::{LookupMiss, MarketLookup};

/// Query parameters for unauthenticated GETs.
pub(crate) type QueryParams<'a> = [(&'a str, String)];

/// Signing state, fixed at construction.
enum Auth {
    Ready(RequestSigner),
    Missing(Vec<&'static str>),
}

/// Client for the CoinDCX REST API.
///
/// Built once at startup and shared read-only; the inner `reqwest::Client`
/// pools connections across calls.
pub struct CoinDcxClient {
    http: Client,
    base_url: String,
    market_data_url: String,
    sandbox_mode: bool,
    auth: Auth,
}

impl CoinDcxClient {
    /// Create a client from configuration.
    ///
    /// Missing credentials are not an error here: public endpoints keep
    /// working and authenticated calls report the missing settings.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Http(format!("failed to create HTTP client: {}", e)))?;

        let auth = match config.credentials() {
            Ok(credentials) => Auth::Ready(RequestSigner::new(credentials)),
            Err(missing) => {
                warn!(
                    missing = ?missing,
                    "CoinDCX credentials not configured, authenticated tools will fail"
                );
                Auth::Missing(missing)
            }
        };

        info!(
            base_url = %config.base_url,
            sandbox_mode = config.sandbox_mode,
            authenticated = matches!(auth, Auth::Ready(_)),
            "CoinDCX client initialized"
        );

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            market_data_url: config.market_data_url.trim_end_matches('/').to_string(),
            sandbox_mode: config.sandbox_mode,
            auth,
        })
    }

    /// Primary API host.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Market-data host.
    pub fn market_data_url(&self) -> &str {
        &self.market_data_url
    }

    pub fn sandbox_mode(&self) -> bool {
        self.sandbox_mode
    }

    /// Whether authenticated endpoints can be called.
    pub fn has_credentials(&self) -> bool {
        matches!(self.auth, Auth::Ready(_))
    }

    /// Unauthenticated GET against the primary host.
    pub(crate) async fn public_request(
        &self,
        endpoint: &str,
        params: &QueryParams<'_>,
    ) -> ClientResult<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        self.get(&url, params).await
    }

    /// Unauthenticated GET against the market-data host.
    pub(crate) async fn public_market_data_request(
        &self,
        endpoint: &str,
        params: &QueryParams<'_>,
    ) -> ClientResult<Value> {
        let url = format!("{}{}", self.market_data_url, endpoint);
        self.get(&url, params).await
    }

    /// Signed POST against the primary host.
    ///
    /// The payload is serialized once to compact JSON; those exact bytes are
    /// signed and sent as the body. Fails before any I/O when credentials are
    /// missing.
    pub(crate) async fn authenticated_request<P>(
        &self,
        endpoint: &str,
        payload: &P,
    ) -> ClientResult<Value>
    where
        P: Serialize + ?Sized,
    {
        let signer = match &self.auth {
            Auth::Ready(signer) => signer,
            Auth::Missing(missing) => {
                return Err(ClientError::MissingCredentials {
                    missing: missing.clone(),
                });
            }
        };

        let body = serde_json::to_string(payload)?;
        let timestamp = Utc::now().timestamp_millis();
        let headers = signer.auth_headers(body.as_bytes(), timestamp)?;

        let url = format!("{}{}", self.base_url, endpoint);
        debug!(url = %url, "Sending authenticated request");

        let response = self
            .http
            .post(&url)
            .body(body)
            .header(CONTENT_TYPE, "application/json")
            .header(HEADER_API_KEY, headers.api_key)
            .header(HEADER_SIGNATURE, headers.signature)
            .header(HEADER_TIMESTAMP, timestamp.to_string())
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn get(&self, url: &str, params: &QueryParams<'_>) -> ClientResult<Value> {
        debug!(url = %url, "Sending public request");
        let response = self.http.get(url).query(params).send().await?;
        Self::read_json(response).await
    }

    async fn read_json(response: Response) -> ClientResult<Value> {
        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::UpstreamHttp {
                status: status.as_u16(),
                url,
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse {
            url,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl MarketLookup for CoinDcxClient {
    async fn find_market(&self, symbol: &str) -> Result<MarketDetails, LookupMiss> {
        match self.find_market_details(symbol).await {
            Ok(Some(market)) => Ok(market),
            Ok(None) => Err(LookupMiss::NotFound(symbol.to_string())),
            Err(e) => Err(LookupMiss::Unavailable(e.to_string())),
        }
    }
}

impl std::fmt::Debug for CoinDcxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinDcxClient")
            .field("base_url", &self.base_url)
            .field("market_data_url", &self.market_data_url)
            .field("sandbox_mode", &self.sandbox_mode)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_without_credentials() {
        let client = CoinDcxClient::new(&ClientConfig::default()).unwrap();
        assert!(!client.has_credentials());
        assert_eq!(client.base_url(), "https://api.coindcx.com");
        assert_eq!(client.market_data_url(), "https://public.coindcx.com");
    }

    #[test]
    fn test_client_url_normalization() {
        let config = ClientConfig::default()
            .with_base_url("https://api.example.com/")
            .with_credentials("key", "secret");
        let client = CoinDcxClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert!(client.has_credentials());
    }

    #[test]
    fn test_client_debug_hides_secret() {
        let config = ClientConfig::default().with_credentials("key", "hunter2");
        let client = CoinDcxClient::new(&config).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("has_credentials: true"));
    }

    #[tokio::test]
    async fn test_authenticated_request_without_credentials_fails_before_io() {
        // Unroutable host: any network attempt would surface as Http/Timeout instead.
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:1");
        let client = CoinDcxClient::new(&config).unwrap();

        let result = client
            .authenticated_request("/exchange/v1/users/balances", &serde_json::Map::new())
            .await;

        match result {
            Err(ClientError::MissingCredentials { missing }) => {
                assert_eq!(missing, vec!["COINDCX_API_KEY", "COINDCX_SECRET_KEY"]);
            }
            other => panic!("expected MissingCredentials, got {:?}", other),
        }
    }
}
