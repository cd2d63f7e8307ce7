//! CoinDCX REST client.
//!
//! Wraps the exchange's public and authenticated endpoints behind a single
//! [`CoinDcxClient`]. Responses are returned as decoded JSON without reshaping,
//! with two exceptions: candle requests may fall back to the most recent
//! candles (see [`candles`]), and single-market detail lookups return one entry.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  public GET          ┌───────────────────┐
//! │              │ ───────────────────→ │ api.coindcx.com   │
//! │ CoinDcxClient│  signed POST         │                   │
//! │              │ ───────────────────→ │                   │
//! │              │                      └───────────────────┘
//! │              │  public GET          ┌───────────────────┐
//! │              │ ───────────────────→ │ public.coindcx.com│
//! └──────┬───────┘  (pair normalized)   └───────────────────┘
//!        │
//!   MarketLookup ── markets_details ──→ B-/I- pair
//! ```
//!
//! # Components
//!
//! - **[`client`]**: dispatch for the three request modes
//! - **[`pair`]**: user symbol to internal pair resolution
//! - **[`candles`]**: candle window policy and fallback shape
//! - **[`orders`]**: typed payloads for authenticated endpoints
//! - **[`config`]**: client configuration
//! - **[`error`]**: error types mapped onto stable codes
//!
//! # Usage
//!
//! ```rust,no_run
//! use coindcx_client::{ClientConfig, CoinDcxClient};
//!
//! # async fn example() -> coindcx_client::ClientResult<()> {
//! let client = CoinDcxClient::new(&ClientConfig::default())?;
//! let ticker = client.ticker().await?;
//! println!("{}", ticker);
//! # Ok(())
//! # }
//! ```

pub mod candles;
pub mod client;
pub mod config;
pub mod error;
mod market_data;
pub mod orders;
pub mod pair;

pub use candles::{CandleFallback, CandleWindow, CandlesResponse};
pub use client::CoinDcxClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use orders::{
    ActiveOrdersRequest, CreateOrderRequest, EmptyPayload, OrderHistoryRequest, OrderIdRequest,
};
pub use pair::{fallback_pair, normalize_pair, LookupMiss, MarketLookup, NoMarketLookup};
