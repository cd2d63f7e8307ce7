//! Fixture data and credentials for tests.

use serde_json::{json, Value};

/// API key used by mocked authenticated calls.
pub const TEST_API_KEY: &str = "test-api-key";

/// Secret used by mocked authenticated calls.
pub const TEST_SECRET_KEY: &str = "test-secret-key";

/// Fixed "now" for candle window tests: 2025-10-09T08:53:20Z.
pub const TEST_NOW_MS: i64 = 1_760_000_000_000;

/// One day in milliseconds.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// A `markets_details` response with one `B-` market, one `KC-` market and
/// one INR market.
pub fn sample_markets_details() -> Value {
    json!([
        {
            "coindcx_name": "ETHUSDT",
            "symbol": "ETHUSDT",
            "pair": "B-ETH_USDT",
            "base_currency_short_name": "USDT",
            "target_currency_short_name": "ETH",
            "status": "active"
        },
        {
            "coindcx_name": "SOLUSDT",
            "symbol": "SOLUSDT",
            "pair": "KC-SOL_USDT",
            "base_currency_short_name": "USDT",
            "target_currency_short_name": "SOL",
            "status": "active"
        },
        {
            "coindcx_name": "BTCINR",
            "symbol": "BTCINR",
            "pair": "I-BTC_INR",
            "base_currency_short_name": "INR",
            "target_currency_short_name": "BTC",
            "status": "active"
        }
    ])
}

/// `count` candles ending at [`TEST_NOW_MS`], newest first, one minute apart.
pub fn sample_candles(count: usize) -> Value {
    let candles: Vec<Value> = (0..count as i64)
        .map(|i| {
            let open = 100.0 + i as f64;
            json!({
                "open": open,
                "high": open + 2.0,
                "low": open - 1.0,
                "close": open + 1.0,
                "volume": 10.0,
                "time": TEST_NOW_MS - i * 60_000
            })
        })
        .collect();
    Value::Array(candles)
}

/// A ticker response with two markets.
pub fn sample_ticker() -> Value {
    json!([
        {"market": "BTCINR", "last_price": "5400000.0", "bid": "5399000.0", "ask": "5401000.0"},
        {"market": "ETHUSDT", "last_price": "2500.5", "bid": "2500.0", "ask": "2501.0"}
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_candles_count_and_order() {
        let candles = sample_candles(3);
        let list = candles.as_array().unwrap();
        assert_eq!(list.len(), 3);
        assert!(list[0]["time"].as_i64().unwrap() > list[1]["time"].as_i64().unwrap());
    }

    #[test]
    fn test_sample_markets_details_pairs() {
        let details = sample_markets_details();
        let pairs: Vec<&str> = details
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["pair"].as_str().unwrap())
            .collect();
        assert_eq!(pairs, vec!["B-ETH_USDT", "KC-SOL_USDT", "I-BTC_INR"]);
    }
}
