//! Order book domain — bid/ask snapshot normalization.

mod convert;
pub mod wire;

use crate::domain::order::LimitOrder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A canonical order book snapshot.
///
/// Levels are kept in the order the exchange sent them; this layer never
/// re-sorts or filters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderBook {
    pub timestamp: DateTime<Utc>,
    pub asks: Vec<LimitOrder>,
    pub bids: Vec<LimitOrder>,
}
