//! A pair of mock servers standing in for the two CoinDCX hosts.

use wiremock::MockServer;

/// Mock primary API host plus mock market-data host.
///
/// Point a client at [`MockExchange::api_uri`] and
/// [`MockExchange::market_data_uri`], then mount mocks on `api` or
/// `market_data` as needed.
pub struct MockExchange {
    pub api: MockServer,
    pub market_data: MockServer,
}

impl MockExchange {
    pub async fn start() -> Self {
        Self {
            api: MockServer::start().await,
            market_data: MockServer::start().await,
        }
    }

    pub fn api_uri(&self) -> String {
        self.api.uri()
    }

    pub fn market_data_uri(&self) -> String {
        self.market_data.uri()
    }

    /// Requests received by the market-data host, oldest first.
    pub async fn market_data_requests(&self) -> Vec<wiremock::Request> {
        self.market_data
            .received_requests()
            .await
            .unwrap_or_default()
    }

    /// Requests received by the primary host, oldest first.
    pub async fn api_requests(&self) -> Vec<wiremock::Request> {
        self.api.received_requests().await.unwrap_or_default()
    }
}
