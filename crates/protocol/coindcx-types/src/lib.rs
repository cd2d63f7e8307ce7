//! Data structures for the CoinDCX MCP adapter.
//!
//! This crate holds the vocabulary shared by the signer, the exchange client
//! and the MCP server. It contains no I/O, only type definitions with
//! serialization support.
//!
//! # Module Organization
//!
//! - [`constants`] - Hosts, endpoint paths and request defaults
//! - [`enums`] - Order side, order type and candle interval
//! - [`market`] - Market metadata entries returned by `markets_details`
//! - [`error`] - Error codes surfaced to MCP clients
//!
//! # Example
//!
//! ```
//! use coindcx_types::{CandleInterval, OrderSide, OrderType};
//!
//! assert_eq!(OrderSide::Buy.as_str(), "buy");
//! assert_eq!(OrderType::LimitOrder.as_str(), "limit_order");
//! assert_eq!(CandleInterval::OneMonth.as_str(), "1M");
//! ```

pub mod constants;
pub mod enums;
pub mod error;
pub mod market;

pub use enums::{CandleInterval, OrderSide, OrderType};
pub use error::ErrorCode;
pub use market::MarketDetails;
