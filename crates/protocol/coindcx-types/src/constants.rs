//! Hosts, endpoint paths and request defaults for the CoinDCX REST API.

use std::time::Duration;

// =============================================================================
// Hosts
// =============================================================================

/// Default primary API host (ticker, markets and all private endpoints).
pub const DEFAULT_BASE_URL: &str = "https://api.coindcx.com";

/// Market-data host serving trades, order books and candles.
pub const PUBLIC_MARKET_DATA_URL: &str = "https://public.coindcx.com";

/// Fixed per-request timeout applied to every outbound call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// =============================================================================
// Public endpoints (primary host)
// =============================================================================

pub const ENDPOINT_TICKER: &str = "/exchange/ticker";
pub const ENDPOINT_MARKETS: &str = "/exchange/v1/markets";
pub const ENDPOINT_MARKETS_DETAILS: &str = "/exchange/v1/markets_details";

// =============================================================================
// Public market-data endpoints (market-data host)
// =============================================================================

pub const ENDPOINT_TRADE_HISTORY: &str = "/market_data/trade_history";
pub const ENDPOINT_ORDERBOOK: &str = "/market_data/orderbook";
pub const ENDPOINT_CANDLES: &str = "/market_data/candles";

// =============================================================================
// Authenticated endpoints (primary host)
// =============================================================================

pub const ENDPOINT_BALANCES: &str = "/exchange/v1/users/balances";
pub const ENDPOINT_USER_INFO: &str = "/exchange/v1/users/info";
pub const ENDPOINT_ORDER_CREATE: &str = "/exchange/v1/orders/create";
pub const ENDPOINT_ORDER_STATUS: &str = "/exchange/v1/orders/status";
pub const ENDPOINT_ORDER_CANCEL: &str = "/exchange/v1/orders/cancel";
pub const ENDPOINT_ACTIVE_ORDERS: &str = "/exchange/v1/orders/active_orders";
pub const ENDPOINT_ORDER_HISTORY: &str = "/exchange/v1/orders";

// =============================================================================
// Authentication headers
// =============================================================================

/// Header carrying the public API key.
pub const HEADER_API_KEY: &str = "X-AUTH-APIKEY";

/// Header carrying the hex HMAC-SHA256 signature.
pub const HEADER_SIGNATURE: &str = "X-AUTH-SIGNATURE";

/// Header echoing the millisecond timestamp that was signed.
pub const HEADER_TIMESTAMP: &str = "X-AUTH-TIMESTAMP";

// =============================================================================
// Request defaults
// =============================================================================

/// Default number of trades returned by `get_trades`.
pub const DEFAULT_TRADES_LIMIT: u32 = 30;

/// Default number of candles requested by the `get_candles` tool.
pub const DEFAULT_CANDLES_LIMIT: u32 = 100;

/// Default number of orders returned by `get_order_history`.
pub const DEFAULT_ORDER_HISTORY_LIMIT: u32 = 500;

/// Largest `limit` accepted by `get_trades`.
pub const MAX_TRADES_LIMIT: u32 = 5000;

/// Largest `limit` accepted by `get_candles`.
pub const MAX_CANDLES_LIMIT: u32 = 1000;

/// Largest `limit` accepted by `get_order_history`.
pub const MAX_ORDER_HISTORY_LIMIT: u32 = 1000;

/// Window used by `get_candles` when the caller gives no explicit range: 24 hours.
pub const DEFAULT_CANDLE_WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

/// Oldest `start_time` accepted for an explicit candle window: 365 days.
pub const MAX_CANDLE_LOOKBACK_MS: i64 = 365 * 24 * 60 * 60 * 1000;
