//! Public endpoints: ticker, markets, market details, trades, order book, candles.

use chrono::Utc;
use coindcx_types::constants::{
    ENDPOINT_CANDLES, ENDPOINT_MARKETS, ENDPOINT_MARKETS_DETAILS, ENDPOINT_ORDERBOOK,
    ENDPOINT_TICKER, ENDPOINT_TRADE_HISTORY,
};
use coindcx_types::{CandleInterval, MarketDetails};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::candles::{is_empty_array, CandleFallback, CandleWindow, CandlesResponse};
use crate::client::CoinDcxClient;
use crate::error::{ClientError, ClientResult};
use crate::pair::normalize_pair;

impl CoinDcxClient {
    /// Ticker data for all markets.
    pub async fn ticker(&self) -> ClientResult<Value> {
        self.public_request(ENDPOINT_TICKER, &[]).await
    }

    /// All market symbols.
    pub async fn markets(&self) -> ClientResult<Value> {
        self.public_request(ENDPOINT_MARKETS, &[]).await
    }

    /// Market details.
    ///
    /// Without a pair, returns the full `markets_details` list. With a pair,
    /// returns the single matching entry or [`ClientError::MarketNotFound`].
    pub async fn market_details(&self, pair: Option<&str>) -> ClientResult<Value> {
        let all = self.public_request(ENDPOINT_MARKETS_DETAILS, &[]).await?;

        let Some(pair) = pair else {
            return Ok(all);
        };

        let market = find_in_details(&all, pair)?
            .ok_or_else(|| ClientError::MarketNotFound(pair.to_string()))?;
        Ok(serde_json::to_value(market)?)
    }

    /// Typed lookup of one market, `None` when nothing matches.
    pub async fn find_market_details(&self, pair: &str) -> ClientResult<Option<MarketDetails>> {
        let all = self.public_request(ENDPOINT_MARKETS_DETAILS, &[]).await?;
        find_in_details(&all, pair)
    }

    /// Recent trades for a market.
    pub async fn trades(&self, pair: &str, limit: u32) -> ClientResult<Value> {
        let formatted = normalize_pair(self, pair).await;
        let params = [("pair", formatted), ("limit", limit.to_string())];
        self.public_market_data_request(ENDPOINT_TRADE_HISTORY, &params)
            .await
    }

    /// Order book (bids and asks) for a market.
    pub async fn order_book(&self, pair: &str) -> ClientResult<Value> {
        let formatted = normalize_pair(self, pair).await;
        let params = [("pair", formatted)];
        self.public_market_data_request(ENDPOINT_ORDERBOOK, &params)
            .await
    }

    /// Candles for a market, with the empty-window fallback.
    pub async fn candles(
        &self,
        pair: &str,
        interval: CandleInterval,
        requested: CandleWindow,
        limit: u32,
    ) -> ClientResult<CandlesResponse> {
        self.candles_at(pair, interval, requested, limit, Utc::now().timestamp_millis())
            .await
    }

    /// [`CoinDcxClient::candles`] with an explicit "now" for window validation.
    pub async fn candles_at(
        &self,
        pair: &str,
        interval: CandleInterval,
        requested: CandleWindow,
        limit: u32,
        now_ms: i64,
    ) -> ClientResult<CandlesResponse> {
        let formatted = normalize_pair(self, pair).await;
        let mut params = vec![
            ("pair", formatted),
            ("interval", interval.as_str().to_string()),
            ("limit", limit.to_string()),
        ];
        let base_params = params.len();

        let window = requested.accepted_at(now_ms);
        match window {
            Some(window) => {
                params.push(("startTime", window.start_time.to_string()));
                params.push(("endTime", window.end_time.to_string()));
            }
            None => debug!(
                start_time = requested.start_time,
                end_time = requested.end_time,
                "Candle window out of range, requesting most recent candles"
            ),
        }

        let result = self
            .public_market_data_request(ENDPOINT_CANDLES, &params)
            .await?;

        if window.is_none() || !is_empty_array(&result) {
            return Ok(CandlesResponse::Raw(result));
        }

        info!(
            pair = %pair,
            start_time = requested.start_time,
            end_time = requested.end_time,
            "No candles in requested window, retrying without time range"
        );
        params.truncate(base_params);
        let retry = self
            .public_market_data_request(ENDPOINT_CANDLES, &params)
            .await?;

        match retry {
            Value::Array(candles) if !candles.is_empty() => Ok(CandlesResponse::Fallback(
                CandleFallback::new(candles, requested),
            )),
            other => Ok(CandlesResponse::Raw(other)),
        }
    }
}

/// Find a market by user-facing symbol in a `markets_details` response.
fn find_in_details(all: &Value, pair: &str) -> ClientResult<Option<MarketDetails>> {
    let Some(entries) = all.as_array() else {
        return Err(ClientError::InvalidResponse {
            url: ENDPOINT_MARKETS_DETAILS.to_string(),
            reason: "expected an array of markets".to_string(),
        });
    };

    for entry in entries {
        match serde_json::from_value::<MarketDetails>(entry.clone()) {
            Ok(market) if market.matches_symbol(pair) => return Ok(Some(market)),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Skipping malformed market entry"),
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_find_in_details_matches() {
        let all = json!([
            {"symbol": "ETHUSDT", "coindcx_name": "ETHUSDT", "pair": "B-ETH_USDT"},
            {"symbol": "BTCUSDT", "coindcx_name": "BTCUSDT", "pair": "KC-BTC_USDT", "status": "active"},
        ]);
        let market = find_in_details(&all, "btcusdt").unwrap().unwrap();
        assert_eq!(market.pair, "KC-BTC_USDT");
        assert_eq!(market.extra["status"], "active");
    }

    #[test]
    fn test_find_in_details_no_match() {
        let all = json!([{"symbol": "ETHUSDT", "coindcx_name": "ETHUSDT", "pair": "B-ETH_USDT"}]);
        assert!(find_in_details(&all, "DOGEINR").unwrap().is_none());
    }

    #[test]
    fn test_find_in_details_rejects_non_array() {
        let err = find_in_details(&json!({"message": "maintenance"}), "BTCUSDT").unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse { .. }));
    }
}
