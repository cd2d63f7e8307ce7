//! MCP server implementation for CoinDCX.
//!
//! Uses the RMCP SDK to expose exchange market data, account data and order
//! management to AI assistants over stdio.

use std::sync::Arc;

use chrono::Utc;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde_json::Value;
use tracing::{info, warn};

use coindcx_client::{CandleWindow, ClientConfig, CoinDcxClient, OrderHistoryRequest};

use crate::error::{McpError as CoinDcxMcpError, McpResult};
use crate::tools::{
    ActiveOrdersInput, CreateOrderInput, GetCandlesInput, GetTradesInput, OrderHistoryInput,
    OrderIdInput, PairInput,
};

/// Create a standardized error response for MCP tools.
///
/// The message is prefixed with the tool name so clients can tell which call
/// failed when several run in sequence.
fn tool_error(tool: &str, error: &CoinDcxMcpError) -> CallToolResult {
    let code = error.error_code();
    let response = serde_json::json!({
        "error": code.to_string(),
        "code": code.code(),
        "message": format!("Error calling {}: {}", tool, error),
        "suggestion": code.suggestion(),
    });
    CallToolResult::error(vec![Content::text(response.to_string())])
}

/// Turn a client result into a tool result.
fn respond<E>(tool: &str, result: Result<Value, E>) -> Result<CallToolResult, McpError>
where
    E: Into<CoinDcxMcpError>,
{
    match result {
        Ok(value) => {
            let json = serde_json::to_string_pretty(&value)
                .map_err(|e| McpError::internal_error(e.to_string(), None))?;
            Ok(CallToolResult::success(vec![Content::text(json)]))
        }
        Err(e) => {
            let err = e.into();
            warn!(tool = tool, error = %err, "Tool call failed");
            Ok(tool_error(tool, &err))
        }
    }
}

/// CoinDCX MCP Server.
///
/// Holds one shared exchange client; every tool call goes through it.
#[derive(Clone)]
pub struct CoinDcxMcpServer {
    /// Exchange client, built once at startup.
    client: Arc<CoinDcxClient>,
    /// Tool router for MCP.
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CoinDcxMcpServer {
    /// Create a server around an existing client.
    pub fn new(client: Arc<CoinDcxClient>) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    /// Build the client from configuration and wrap it in a server.
    pub fn from_config(config: &ClientConfig) -> McpResult<Self> {
        let client = CoinDcxClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// The shared exchange client.
    pub fn client(&self) -> &CoinDcxClient {
        &self.client
    }

    // ========================================================================
    // Public market data
    // ========================================================================

    #[tool(description = "Get ticker data for all markets on CoinDCX")]
    async fn get_ticker(&self) -> Result<CallToolResult, McpError> {
        info!(tool = "get_ticker", "Calling tool");
        respond("get_ticker", self.client.ticker().await)
    }

    #[tool(description = "Get all available trading markets on CoinDCX")]
    async fn get_markets(&self) -> Result<CallToolResult, McpError> {
        info!(tool = "get_markets", "Calling tool");
        respond("get_markets", self.client.markets().await)
    }

    #[tool(description = "Get detailed information about a specific trading pair")]
    async fn get_market_details(
        &self,
        Parameters(input): Parameters<PairInput>,
    ) -> Result<CallToolResult, McpError> {
        info!(tool = "get_market_details", pair = %input.pair, "Calling tool");
        respond(
            "get_market_details",
            self.client.market_details(Some(&input.pair)).await,
        )
    }

    #[tool(description = "Get recent trades for a specific market")]
    async fn get_trades(
        &self,
        Parameters(input): Parameters<GetTradesInput>,
    ) -> Result<CallToolResult, McpError> {
        let limit = match input.limit() {
            Ok(limit) => limit,
            Err(e) => return respond::<CoinDcxMcpError>("get_trades", Err(e)),
        };
        info!(tool = "get_trades", pair = %input.pair, limit = limit, "Calling tool");
        respond("get_trades", self.client.trades(&input.pair, limit).await)
    }

    #[tool(description = "Get order book (bids and asks) for a specific market")]
    async fn get_order_book(
        &self,
        Parameters(input): Parameters<PairInput>,
    ) -> Result<CallToolResult, McpError> {
        info!(tool = "get_order_book", pair = %input.pair, "Calling tool");
        respond("get_order_book", self.client.order_book(&input.pair).await)
    }

    #[tool(
        description = "Get candlestick/OHLCV data for a specific market. If start_time/end_time are not available or invalid, returns most recent candles."
    )]
    async fn get_candles(
        &self,
        Parameters(input): Parameters<GetCandlesInput>,
    ) -> Result<CallToolResult, McpError> {
        let limit = match input.limit() {
            Ok(limit) => limit,
            Err(e) => return respond::<CoinDcxMcpError>("get_candles", Err(e)),
        };
        let now = Utc::now().timestamp_millis();
        let default_window = CandleWindow::trailing_day(now);
        let window = CandleWindow::new(
            input.start_time.unwrap_or(default_window.start_time),
            input.end_time.unwrap_or(default_window.end_time),
        );
        info!(
            tool = "get_candles",
            pair = %input.pair,
            start_time = window.start_time,
            end_time = window.end_time,
            limit = limit,
            "Calling tool"
        );

        let result = self
            .client
            .candles_at(&input.pair, input.interval.into(), window, limit, now)
            .await
            .map(|candles| candles.into_value());
        respond("get_candles", result)
    }

    // ========================================================================
    // Account
    // ========================================================================

    #[tool(description = "Get account balances for all assets")]
    async fn get_balances(&self) -> Result<CallToolResult, McpError> {
        info!(tool = "get_balances", "Calling tool");
        respond("get_balances", self.client.balances().await)
    }

    #[tool(description = "Get user account information")]
    async fn get_user_info(&self) -> Result<CallToolResult, McpError> {
        info!(tool = "get_user_info", "Calling tool");
        respond("get_user_info", self.client.user_info().await)
    }

    // ========================================================================
    // Orders
    // ========================================================================

    #[tool(description = "Create a new buy or sell order")]
    async fn create_order(
        &self,
        Parameters(input): Parameters<CreateOrderInput>,
    ) -> Result<CallToolResult, McpError> {
        info!(
            tool = "create_order",
            market = %input.market,
            side = ?input.side,
            order_type = ?input.order_type,
            "Calling tool"
        );
        let order = input.into();
        respond("create_order", self.client.create_order(&order).await)
    }

    #[tool(description = "Get status of a specific order")]
    async fn get_order_status(
        &self,
        Parameters(input): Parameters<OrderIdInput>,
    ) -> Result<CallToolResult, McpError> {
        info!(tool = "get_order_status", order_id = %input.order_id, "Calling tool");
        respond(
            "get_order_status",
            self.client.order_status(&input.order_id).await,
        )
    }

    #[tool(description = "Cancel an existing order")]
    async fn cancel_order(
        &self,
        Parameters(input): Parameters<OrderIdInput>,
    ) -> Result<CallToolResult, McpError> {
        info!(tool = "cancel_order", order_id = %input.order_id, "Calling tool");
        respond("cancel_order", self.client.cancel_order(&input.order_id).await)
    }

    #[tool(description = "Get all active orders")]
    async fn get_active_orders(
        &self,
        Parameters(input): Parameters<ActiveOrdersInput>,
    ) -> Result<CallToolResult, McpError> {
        info!(tool = "get_active_orders", market = ?input.market, side = ?input.side, "Calling tool");
        let filter = input.into();
        respond(
            "get_active_orders",
            self.client.active_orders(&filter).await,
        )
    }

    #[tool(description = "Get historical orders")]
    async fn get_order_history(
        &self,
        Parameters(input): Parameters<OrderHistoryInput>,
    ) -> Result<CallToolResult, McpError> {
        info!(
            tool = "get_order_history",
            market = ?input.market,
            side = ?input.side,
            limit = ?input.limit,
            "Calling tool"
        );
        let filter = match OrderHistoryRequest::try_from(input) {
            Ok(filter) => filter,
            Err(e) => return respond::<CoinDcxMcpError>("get_order_history", Err(e)),
        };
        respond(
            "get_order_history",
            self.client.order_history(&filter).await,
        )
    }
}

#[tool_handler]
impl rmcp::ServerHandler for CoinDcxMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut instructions = String::from(
            "CoinDCX MCP Server - Market data, account data and order management for the \
             CoinDCX exchange. Market data tools (get_ticker, get_markets, get_market_details, \
             get_trades, get_order_book, get_candles) need no credentials. Account and order \
             tools need COINDCX_API_KEY and COINDCX_SECRET_KEY. Pairs may be given as \
             'BTCUSDT'; they are converted to the exchange's internal form automatically.",
        );
        if self.client.sandbox_mode() {
            instructions.push_str(" Sandbox mode is enabled.");
        }
        if !self.client.has_credentials() {
            instructions.push_str(" Credentials are not configured; account and order tools will fail.");
        }

        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(instructions),
        }
    }
}

/// Run the MCP server on stdio until the client disconnects.
pub async fn run_server(config: ClientConfig) -> McpResult<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!(
        base_url = %config.base_url,
        sandbox_mode = config.sandbox_mode,
        "Starting CoinDCX MCP server"
    );

    let server = CoinDcxMcpServer::from_config(&config)?;

    // A transport that fails during setup (e.g. stdin already closed) is a
    // clean exit.
    let service = match server.serve(stdio()).await {
        Ok(s) => s,
        Err(e) => {
            info!("MCP transport closed during setup: {}", e);
            return Ok(());
        }
    };

    if let Err(e) = service.waiting().await {
        info!("MCP transport closed: {}", e);
    }

    info!("CoinDCX MCP server stopped");
    Ok(())
}
