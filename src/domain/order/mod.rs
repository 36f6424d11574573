//! Order domain — limit orders, order status, order-info normalization.

mod convert;
pub mod wire;

use crate::shared::{CurrencyPair, Side};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── OrderStatus ─────────────────────────────────────────────────────────────

/// Canonical order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    New,
    PartiallyFilled,
    Filled,
    Canceled,
}

// ─── LimitOrder ──────────────────────────────────────────────────────────────

/// A canonical limit order.
///
/// Doubles as an order-book level: book snapshots populate only `side`,
/// `amount`, `pair`, and `limit_price`, leaving identity and fill-progress
/// fields unset (a resting level has no id, creation time, or fee).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LimitOrder {
    pub side: Side,
    pub amount: Decimal,
    pub pair: CurrencyPair,
    pub id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub limit_price: Decimal,
    pub average_price: Option<Decimal>,
    pub filled_amount: Option<Decimal>,
    pub fee: Option<Decimal>,
    pub status: Option<OrderStatus>,
}
