//! Market metadata entries.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Quote currencies whose `KC-` pair can be rebuilt from a bare symbol.
const KC_QUOTES: [&str; 2] = ["USDT", "BTC"];

/// One entry of `/exchange/v1/markets_details`.
///
/// Only the fields the adapter reads are typed; everything else the exchange
/// returns is kept in `extra` and serialized back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketDetails {
    /// Exchange symbol, e.g. `BTCUSDT`.
    #[serde(default)]
    pub symbol: String,

    /// Display name used across the CoinDCX UI, e.g. `BTCUSDT`.
    #[serde(default)]
    pub coindcx_name: String,

    /// Internal pair identifier, e.g. `B-BTC_USDT` or `KC-BTC_USDT`.
    #[serde(default)]
    pub pair: String,

    /// Remaining exchange fields (precision, limits, status, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MarketDetails {
    /// Case-insensitive match of a user-facing symbol against this entry.
    ///
    /// Matches `coindcx_name`, `symbol`, or a `KC-{base}_{quote}` pair built by
    /// inserting an underscore before a `USDT` or `BTC` suffix.
    pub fn matches_symbol(&self, user_pair: &str) -> bool {
        let wanted = user_pair.to_uppercase();
        if self.coindcx_name.to_uppercase() == wanted || self.symbol.to_uppercase() == wanted {
            return true;
        }

        let pair = self.pair.to_uppercase();
        KC_QUOTES.iter().any(|quote| {
            wanted
                .strip_suffix(quote)
                .map(|base| pair == format!("KC-{}_{}", base, quote))
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(symbol: &str, coindcx_name: &str, pair: &str) -> MarketDetails {
        MarketDetails {
            symbol: symbol.to_string(),
            coindcx_name: coindcx_name.to_string(),
            pair: pair.to_string(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_matches_coindcx_name_case_insensitive() {
        let market = entry("", "BTCUSDT", "");
        assert!(market.matches_symbol("btcusdt"));
    }

    #[test]
    fn test_matches_symbol() {
        let market = entry("ETHINR", "", "I-ETH_INR");
        assert!(market.matches_symbol("EthInr"));
    }

    #[test]
    fn test_matches_constructed_kc_pair() {
        let market = entry("", "", "KC-SOL_USDT");
        assert!(market.matches_symbol("solusdt"));

        let market = entry("", "", "KC-ETH_BTC");
        assert!(market.matches_symbol("ETHBTC"));
    }

    #[test]
    fn test_no_match() {
        let market = entry("BTCUSDT", "BTCUSDT", "B-BTC_USDT");
        assert!(!market.matches_symbol("ETHUSDT"));
    }

    #[test]
    fn test_extra_fields_roundtrip() {
        let json = r#"{"symbol":"BTCUSDT","coindcx_name":"BTCUSDT","pair":"B-BTC_USDT","status":"active","min_quantity":0.0001}"#;
        let market: MarketDetails = serde_json::from_str(json).unwrap();
        assert_eq!(market.pair, "B-BTC_USDT");
        assert_eq!(market.extra["status"], "active");

        let back = serde_json::to_value(&market).unwrap();
        assert_eq!(back["min_quantity"], 0.0001);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let market: MarketDetails = serde_json::from_str(r#"{"status":"inactive"}"#).unwrap();
        assert!(market.symbol.is_empty());
        assert!(!market.matches_symbol("BTCUSDT"));
    }
}
