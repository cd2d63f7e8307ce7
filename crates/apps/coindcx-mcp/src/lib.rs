//! MCP server exposing the CoinDCX exchange as tools.
//!
//! Thirteen tools cover public market data, account data and order
//! management. Each call is forwarded to a shared [`CoinDcxClient`] and the
//! exchange's JSON comes back as pretty-printed text. Failures come back as
//! error tool results; the server keeps serving.
//!
//! [`CoinDcxClient`]: coindcx_client::CoinDcxClient

pub mod cli;
pub mod error;
pub mod server;
pub mod tools;

pub use error::{McpError, McpResult};
pub use server::{run_server, CoinDcxMcpServer};
