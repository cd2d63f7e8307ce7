//! Pair normalization.
//!
//! Users name markets the way tickers print them (`BTCUSDT`); the market-data
//! host wants the internal pair (`B-BTC_USDT`). Resolution is best effort and
//! never fails:
//!
//! 1. Look the symbol up in market metadata. A `KC-` pair is rewritten to `B-`.
//! 2. Otherwise split off a known quote suffix (`USDT`, `BTC`, `INR`).
//! 3. Otherwise prefix the uppercased input with `B-`.
//!
//! Whether the result names a real market is left to the exchange.

use async_trait::async_trait;
use coindcx_types::MarketDetails;
use thiserror::Error;
use tracing::debug;

/// Quote suffixes in match order, with the market-segment prefix they map to.
const QUOTE_SEGMENTS: [(&str, &str); 3] = [("USDT", "B"), ("BTC", "B"), ("INR", "I")];

/// Why a metadata lookup produced nothing usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupMiss {
    /// Metadata was fetched but no entry matched.
    #[error("no market matches '{0}'")]
    NotFound(String),

    /// Metadata could not be fetched.
    #[error("market metadata unavailable: {0}")]
    Unavailable(String),
}

/// Source of market metadata for pair resolution.
#[async_trait]
pub trait MarketLookup: Send + Sync {
    /// Find the metadata entry for a user-facing symbol.
    async fn find_market(&self, symbol: &str) -> Result<MarketDetails, LookupMiss>;
}

/// Lookup that never finds anything; resolution goes straight to the heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMarketLookup;

#[async_trait]
impl MarketLookup for NoMarketLookup {
    async fn find_market(&self, symbol: &str) -> Result<MarketDetails, LookupMiss> {
        Err(LookupMiss::NotFound(symbol.to_string()))
    }
}

/// Resolve a user-facing symbol to the exchange-internal pair.
pub async fn normalize_pair<L>(lookup: &L, user_pair: &str) -> String
where
    L: MarketLookup + ?Sized,
{
    match lookup.find_market(user_pair).await {
        Ok(market) => {
            if let Some(rest) = market.pair.strip_prefix("KC-") {
                return format!("B-{}", rest);
            }
            debug!(
                pair = %user_pair,
                market_pair = %market.pair,
                "Market found without KC- pair, using suffix heuristic"
            );
        }
        Err(miss) => {
            debug!(pair = %user_pair, reason = %miss, "Market lookup missed, using suffix heuristic");
        }
    }

    fallback_pair(user_pair)
}

/// Suffix heuristic used when metadata gives no answer.
///
/// ```
/// use coindcx_client::pair::fallback_pair;
///
/// assert_eq!(fallback_pair("BTCUSDT"), "B-BTC_USDT");
/// assert_eq!(fallback_pair("ethbtc"), "B-ETH_BTC");
/// assert_eq!(fallback_pair("SOLINR"), "I-SOL_INR");
/// assert_eq!(fallback_pair("doge"), "B-DOGE");
/// ```
pub fn fallback_pair(user_pair: &str) -> String {
    let upper = user_pair.to_uppercase();

    for (quote, segment) in QUOTE_SEGMENTS {
        if let Some(base) = upper.strip_suffix(quote) {
            return format!("{}-{}_{}", segment, base, quote);
        }
    }

    format!("B-{}", upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    struct FixedLookup(Result<MarketDetails, LookupMiss>);

    #[async_trait]
    impl MarketLookup for FixedLookup {
        async fn find_market(&self, _symbol: &str) -> Result<MarketDetails, LookupMiss> {
            self.0.clone()
        }
    }

    fn market_with_pair(pair: &str) -> MarketDetails {
        MarketDetails {
            symbol: String::new(),
            coindcx_name: String::new(),
            pair: pair.to_string(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_fallback_quotes() {
        assert_eq!(fallback_pair("BTCUSDT"), "B-BTC_USDT");
        assert_eq!(fallback_pair("ETHBTC"), "B-ETH_BTC");
        assert_eq!(fallback_pair("ETHINR"), "I-ETH_INR");
    }

    #[test]
    fn test_fallback_uppercases() {
        assert_eq!(fallback_pair("btcusdt"), "B-BTC_USDT");
        assert_eq!(fallback_pair("xyz"), "B-XYZ");
    }

    #[test]
    fn test_fallback_usdt_checked_before_btc() {
        // WBTCUSDT ends with USDT, not BTC
        assert_eq!(fallback_pair("WBTCUSDT"), "B-WBTC_USDT");
    }

    #[test]
    fn test_fallback_bare_quote() {
        assert_eq!(fallback_pair("USDT"), "B-_USDT");
    }

    #[test]
    fn test_fallback_totality() {
        for input in ["a", "BTC", "INR", "1000SATSUSDT", "b-btc_usdt", "ÄÖÜ", "x y"] {
            let pair = fallback_pair(input);
            assert!(!pair.is_empty());
            assert!(pair.starts_with("B-") || pair.starts_with("I-"));
            if pair.starts_with("I-") {
                assert!(pair.ends_with("_INR"));
            }
        }
    }

    #[tokio::test]
    async fn test_normalize_without_metadata() {
        assert_eq!(normalize_pair(&NoMarketLookup, "BTCUSDT").await, "B-BTC_USDT");
    }

    #[tokio::test]
    async fn test_normalize_rewrites_kc_prefix() {
        let lookup = FixedLookup(Ok(market_with_pair("KC-PEPE_USDT")));
        assert_eq!(normalize_pair(&lookup, "PEPEUSDT").await, "B-PEPE_USDT");
    }

    #[tokio::test]
    async fn test_normalize_non_kc_match_falls_through() {
        let lookup = FixedLookup(Ok(market_with_pair("I-BTC_INR")));
        assert_eq!(normalize_pair(&lookup, "BTCINR").await, "I-BTC_INR");

        let lookup = FixedLookup(Ok(market_with_pair("B-ODD_PAIR")));
        assert_eq!(normalize_pair(&lookup, "ETHUSDT").await, "B-ETH_USDT");
    }

    #[tokio::test]
    async fn test_normalize_swallows_unavailable_metadata() {
        let lookup = FixedLookup(Err(LookupMiss::Unavailable("HTTP 503".into())));
        assert_eq!(normalize_pair(&lookup, "ethinr").await, "I-ETH_INR");
    }
}
