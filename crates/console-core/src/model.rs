//! Backend payloads.
//!
//! Entities are read-only copies of what the backend returned on the last
//! fetch. Status, type and side strings on responses are kept raw: the
//! backend owns those vocabularies and the renderer maps them onto a closed
//! set of display tags.

use serde::{Deserialize, Serialize};

/// A trading account as returned by `GET /accounts`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub account_number: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub balance: f64,
    pub available_balance: f64,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// An order as returned by `GET /orders` and `POST /orders`.
///
/// Every field is defaulted so that a minimal acknowledgement such as
/// `{"orderNumber": "X1", "status": "FILLED"}` still decodes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub account_id: i64,
    pub symbol: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub side: String,
    pub quantity: i64,
    pub limit_price: Option<f64>,
    pub executed_price: Option<f64>,
    pub executed_quantity: Option<i64>,
    pub status: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// One fill or rejection event, as returned by `GET /execution-logs`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionLog {
    pub id: i64,
    pub order_id: i64,
    pub quantity: i64,
    pub price: f64,
    pub total_amount: f64,
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    pub executed_at: String,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    #[default]
    Market,
    Limit,
}

impl OrderType {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            OrderType::Market => OrderType::Limit,
            OrderType::Limit => OrderType::Market,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    #[default]
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            OrderSide::Buy => OrderSide::Sell,
            OrderSide::Sell => OrderSide::Buy,
        }
    }
}

/// Body of `POST /orders`.
///
/// Account id and quantity that do not parse are sent as `null`, and an
/// unusable limit price is left out; the backend decides whether that is
/// acceptable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub account_id: Option<i64>,
    pub symbol: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub side: OrderSide,
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<f64>,
}

/// Structured error body the backend sends with a non-2xx status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Rejection {
    #[serde(default)]
    pub message: Option<String>,
}
