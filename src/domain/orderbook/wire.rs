//! Wire types for the order book endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order book snapshot response.
///
/// The payload does not name its own market; the caller supplies the currency
/// pair at conversion time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderBookResponse {
    #[serde(rename = "errorCode")]
    pub error_code: String,
    pub result: String,
    /// Epoch seconds, as a string.
    pub timestamp: String,
    pub ask: Vec<BookEntry>,
    pub bid: Vec<BookEntry>,
}

/// A single price level. Side is implicit from the `ask`/`bid` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookEntry {
    pub price: Decimal,
    pub qty: Decimal,
}
