//! Authenticated endpoints: account, order placement and order queries.
//!
//! Payloads are typed structs serialized in field order. Unset optional
//! fields are left out of the JSON entirely rather than sent as `null`.

use coindcx_types::constants::{
    DEFAULT_ORDER_HISTORY_LIMIT, ENDPOINT_ACTIVE_ORDERS, ENDPOINT_BALANCES, ENDPOINT_ORDER_CANCEL,
    ENDPOINT_ORDER_CREATE, ENDPOINT_ORDER_HISTORY, ENDPOINT_ORDER_STATUS, ENDPOINT_USER_INFO,
};
use coindcx_types::{OrderSide, OrderType};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::client::CoinDcxClient;
use crate::error::ClientResult;

/// Empty `{}` payload for endpoints that take no parameters.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct EmptyPayload {}

/// Body of `/exchange/v1/orders/create`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOrderRequest {
    pub side: OrderSide,
    pub order_type: OrderType,
    pub market: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
}

impl CreateOrderRequest {
    pub fn new(side: OrderSide, order_type: OrderType, market: impl Into<String>) -> Self {
        Self {
            side,
            order_type,
            market: market.into(),
            price_per_unit: None,
            quantity: None,
            total_quantity: None,
            client_order_id: None,
        }
    }

    pub fn with_price(mut self, price: Option<f64>) -> Self {
        self.price_per_unit = price;
        self
    }

    pub fn with_quantity(mut self, quantity: Option<f64>) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_total_quantity(mut self, total_quantity: Option<f64>) -> Self {
        self.total_quantity = total_quantity;
        self
    }

    pub fn with_client_order_id(mut self, client_order_id: Option<String>) -> Self {
        self.client_order_id = client_order_id;
        self
    }
}

/// Body of the status and cancel endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderIdRequest {
    pub id: String,
}

impl OrderIdRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Body of `/exchange/v1/orders/active_orders`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActiveOrdersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
}

/// Body of `/exchange/v1/orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderHistoryRequest {
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<i64>,
}

impl Default for OrderHistoryRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_ORDER_HISTORY_LIMIT,
            market: None,
            side: None,
            from: None,
            to: None,
        }
    }
}

impl CoinDcxClient {
    /// Account balances.
    pub async fn balances(&self) -> ClientResult<Value> {
        self.authenticated_request(ENDPOINT_BALANCES, &EmptyPayload {})
            .await
    }

    /// Account profile.
    pub async fn user_info(&self) -> ClientResult<Value> {
        self.authenticated_request(ENDPOINT_USER_INFO, &EmptyPayload {})
            .await
    }

    /// Place an order. Parameter consistency is left to the exchange.
    pub async fn create_order(&self, order: &CreateOrderRequest) -> ClientResult<Value> {
        info!(
            market = %order.market,
            side = %order.side,
            order_type = %order.order_type,
            "Creating order"
        );
        self.authenticated_request(ENDPOINT_ORDER_CREATE, order)
            .await
    }

    pub async fn order_status(&self, order_id: &str) -> ClientResult<Value> {
        self.authenticated_request(ENDPOINT_ORDER_STATUS, &OrderIdRequest::new(order_id))
        .await
    }

    pub async fn cancel_order(&self, order_id: &str) -> ClientResult<Value> {
        info!(order_id = %order_id, "Cancelling order");
        self.authenticated_request(ENDPOINT_ORDER_CANCEL, &OrderIdRequest::new(order_id))
        .await
    }

    /// Open orders, optionally filtered.
    pub async fn active_orders(&self, filter: &ActiveOrdersRequest) -> ClientResult<Value> {
        self.authenticated_request(ENDPOINT_ACTIVE_ORDERS, filter)
            .await
    }

    /// Past orders, optionally filtered.
    pub async fn order_history(&self, filter: &OrderHistoryRequest) -> ClientResult<Value> {
        self.authenticated_request(ENDPOINT_ORDER_HISTORY, filter)
            .await
    }
}
