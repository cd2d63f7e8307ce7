//! MCP tool input types.
//!
//! Each tool takes one of these as its `Parameters`. The derived JSON Schema
//! is what MCP clients see when they list tools, so field docs double as
//! argument descriptions. Inputs reject unknown fields, and `limit`
//! arguments are checked against the same bounds the schema advertises
//! before any request is sent.

use coindcx_client::{ActiveOrdersRequest, CreateOrderRequest, OrderHistoryRequest};
use coindcx_types::constants::{
    DEFAULT_CANDLES_LIMIT, DEFAULT_ORDER_HISTORY_LIMIT, DEFAULT_TRADES_LIMIT, MAX_CANDLES_LIMIT,
    MAX_ORDER_HISTORY_LIMIT, MAX_TRADES_LIMIT,
};
use coindcx_types::{CandleInterval, OrderSide, OrderType};
use rmcp::schemars;
use rmcp::schemars::JsonSchema;
use serde::Deserialize;

use crate::error::{McpError, McpResult};

/// Resolve an optional `limit` argument against its default and upper bound.
fn bounded_limit(limit: Option<u32>, default: u32, max: u32) -> McpResult<u32> {
    let limit = limit.unwrap_or(default);
    if (1..=max).contains(&limit) {
        Ok(limit)
    } else {
        Err(McpError::InvalidArguments(format!(
            "limit must be between 1 and {max}, got {limit}"
        )))
    }
}

// ============================================================================
// Enum arguments
// ============================================================================

/// Order side argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SideArg {
    Buy,
    Sell,
}

impl From<SideArg> for OrderSide {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::Buy => OrderSide::Buy,
            SideArg::Sell => OrderSide::Sell,
        }
    }
}

/// Order type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderTypeArg {
    MarketOrder,
    LimitOrder,
    StopOrder,
}

impl From<OrderTypeArg> for OrderType {
    fn from(arg: OrderTypeArg) -> Self {
        match arg {
            OrderTypeArg::MarketOrder => OrderType::MarketOrder,
            OrderTypeArg::LimitOrder => OrderType::LimitOrder,
            OrderTypeArg::StopOrder => OrderType::StopOrder,
        }
    }
}

/// Candle interval argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
pub enum IntervalArg {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "2h")]
    TwoHours,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "6h")]
    SixHours,
    #[serde(rename = "8h")]
    EightHours,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "3d")]
    ThreeDays,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
}

impl From<IntervalArg> for CandleInterval {
    fn from(arg: IntervalArg) -> Self {
        match arg {
            IntervalArg::OneMinute => CandleInterval::OneMinute,
            IntervalArg::FiveMinutes => CandleInterval::FiveMinutes,
            IntervalArg::FifteenMinutes => CandleInterval::FifteenMinutes,
            IntervalArg::ThirtyMinutes => CandleInterval::ThirtyMinutes,
            IntervalArg::OneHour => CandleInterval::OneHour,
            IntervalArg::TwoHours => CandleInterval::TwoHours,
            IntervalArg::FourHours => CandleInterval::FourHours,
            IntervalArg::SixHours => CandleInterval::SixHours,
            IntervalArg::EightHours => CandleInterval::EightHours,
            IntervalArg::OneDay => CandleInterval::OneDay,
            IntervalArg::ThreeDays => CandleInterval::ThreeDays,
            IntervalArg::OneWeek => CandleInterval::OneWeek,
            IntervalArg::OneMonth => CandleInterval::OneMonth,
        }
    }
}

// ============================================================================
// Market data tools
// ============================================================================

/// Input for `get_market_details` and `get_order_book`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PairInput {
    /// Trading pair symbol (e.g. 'BTCUSDT').
    pub pair: String,
}

/// Input for the `get_trades` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetTradesInput {
    /// Trading pair symbol (e.g. 'BTCUSDT').
    pub pair: String,

    /// Number of trades to retrieve (default: 30, max: 5000).
    #[serde(default)]
    #[schemars(range(min = 1, max = 5000))]
    pub limit: Option<u32>,
}

impl GetTradesInput {
    pub fn limit(&self) -> McpResult<u32> {
        bounded_limit(self.limit, DEFAULT_TRADES_LIMIT, MAX_TRADES_LIMIT)
    }
}

/// Input for the `get_candles` tool.
///
/// Missing bounds default to the 24 hours before the call.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetCandlesInput {
    /// Trading pair symbol (e.g. 'BTCUSDT').
    pub pair: String,

    /// Candle interval (1m, 5m, 15m, 30m, 1h, 2h, 4h, 6h, 8h, 1d, 3d, 1w, 1M).
    pub interval: IntervalArg,

    /// Start timestamp in milliseconds. If missing or invalid, recent data is returned.
    #[serde(default)]
    pub start_time: Option<i64>,

    /// End timestamp in milliseconds. If missing or invalid, recent data is returned.
    #[serde(default)]
    pub end_time: Option<i64>,

    /// Number of candles to retrieve (default: 100, max: 1000).
    #[serde(default)]
    #[schemars(range(min = 1, max = 1000))]
    pub limit: Option<u32>,
}

impl GetCandlesInput {
    pub fn limit(&self) -> McpResult<u32> {
        bounded_limit(self.limit, DEFAULT_CANDLES_LIMIT, MAX_CANDLES_LIMIT)
    }
}

// ============================================================================
// Order tools
// ============================================================================

/// Input for the `create_order` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateOrderInput {
    /// Order side.
    pub side: SideArg,

    /// Order type.
    pub order_type: OrderTypeArg,

    /// Trading pair (e.g. 'BTCUSDT').
    pub market: String,

    /// Price per unit (required for limit orders).
    #[serde(default)]
    pub price: Option<f64>,

    /// Quantity to buy or sell.
    #[serde(default)]
    pub quantity: Option<f64>,

    /// Total quantity (for market orders).
    #[serde(default)]
    pub total_quantity: Option<f64>,

    /// Custom order ID for tracking.
    #[serde(default)]
    pub client_order_id: Option<String>,
}

impl From<CreateOrderInput> for CreateOrderRequest {
    fn from(input: CreateOrderInput) -> Self {
        CreateOrderRequest::new(input.side.into(), input.order_type.into(), input.market)
            .with_price(input.price)
            .with_quantity(input.quantity)
            .with_total_quantity(input.total_quantity)
            .with_client_order_id(input.client_order_id)
    }
}

/// Input for `get_order_status` and `cancel_order`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct OrderIdInput {
    /// Order ID.
    pub order_id: String,
}

/// Input for the `get_active_orders` tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ActiveOrdersInput {
    /// Filter by trading pair (optional).
    #[serde(default)]
    pub market: Option<String>,

    /// Filter by order side (optional).
    #[serde(default)]
    pub side: Option<SideArg>,
}

impl From<ActiveOrdersInput> for ActiveOrdersRequest {
    fn from(input: ActiveOrdersInput) -> Self {
        ActiveOrdersRequest {
            market: input.market,
            side: input.side.map(Into::into),
        }
    }
}

/// Input for the `get_order_history` tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct OrderHistoryInput {
    /// Filter by trading pair (optional).
    #[serde(default)]
    pub market: Option<String>,

    /// Filter by order side (optional).
    #[serde(default)]
    pub side: Option<SideArg>,

    /// Start timestamp in milliseconds (optional).
    #[serde(default)]
    pub from_timestamp: Option<i64>,

    /// End timestamp in milliseconds (optional).
    #[serde(default)]
    pub to_timestamp: Option<i64>,

    /// Number of orders to retrieve (default: 500, max: 1000).
    #[serde(default)]
    #[schemars(range(min = 1, max = 1000))]
    pub limit: Option<u32>,
}

impl TryFrom<OrderHistoryInput> for OrderHistoryRequest {
    type Error = McpError;

    fn try_from(input: OrderHistoryInput) -> McpResult<Self> {
        Ok(OrderHistoryRequest {
            limit: bounded_limit(input.limit, DEFAULT_ORDER_HISTORY_LIMIT, MAX_ORDER_HISTORY_LIMIT)?,
            market: input.market,
            side: input.side.map(Into::into),
            from: input.from_timestamp,
            to: input.to_timestamp,
        })
    }
}
