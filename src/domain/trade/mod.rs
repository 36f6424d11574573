//! Trade domain — trade history normalization.

mod convert;
pub mod wire;

use crate::shared::CurrencyPair;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A canonical trade execution record.
///
/// The Coinone wire format carries neither a trade id nor the originating
/// order id, so both stay unset here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub id: Option<String>,
    pub amount: Decimal,
    pub pair: CurrencyPair,
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
    pub order_id: Option<String>,
}

/// How a [`Trades`] collection is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSortType {
    ByTimestamp,
    ById,
}

/// A trade-history collection, tagged with its ordering.
///
/// Upstream delivers trades time-ordered; this layer records that assumption
/// but does not verify or re-sort.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trades {
    pub trades: Vec<Trade>,
    pub sort: TradeSortType,
}
