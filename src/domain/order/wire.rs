//! Wire types for the order-info endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Response for a single order lookup.
///
/// Unlike the market-data endpoints, this response carries no
/// `errorCode`/`result` envelope; a failed lookup surfaces at the transport
/// layer instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderInfoResponse {
    /// One of `"live"`, `"filled"`, `"partially_filled"`; anything else is
    /// treated as canceled downstream.
    pub status: String,
    pub info: OrderInfo,
}

/// The embedded order record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderInfo {
    /// `"ask"` or `"bid"` on the wire.
    #[serde(rename = "type")]
    pub side: String,
    pub currency: String,
    pub qty: Decimal,
    #[serde(rename = "remainQty")]
    pub remain_qty: Decimal,
    pub price: Decimal,
    pub fee: Decimal,
    #[serde(rename = "orderId")]
    pub order_id: String,
    /// Epoch **milliseconds** — the one endpoint that does not use seconds.
    pub timestamp: i64,
}
