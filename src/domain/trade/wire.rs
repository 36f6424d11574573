//! Wire types for the trade-history endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trade-history response. The payload does not name its own market; the
/// caller supplies the currency pair at conversion time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradesResponse {
    #[serde(rename = "errorCode")]
    pub error_code: String,
    pub result: String,
    #[serde(rename = "completeOrders")]
    pub complete_orders: Vec<TradeEntry>,
}

/// A single executed trade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeEntry {
    pub qty: Decimal,
    pub price: Decimal,
    /// Epoch seconds, as a string.
    pub timestamp: String,
}
