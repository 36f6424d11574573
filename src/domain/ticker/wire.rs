//! Wire types for the ticker endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ticker snapshot response. Self-describing: it names its own base currency,
/// and carries no `errorCode`/`result` envelope — a malformed snapshot fails
/// at deserialization, outside this layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TickerResponse {
    pub currency: String,
    /// Epoch seconds, as a string.
    pub timestamp: String,
    pub high: Decimal,
    pub low: Decimal,
    pub last: Decimal,
    /// Opening price; the wire calls it `first`.
    pub first: Decimal,
    pub volume: Decimal,
}
