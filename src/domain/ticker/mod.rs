//! Ticker domain — market summary normalization.

mod convert;
pub mod wire;

use crate::shared::CurrencyPair;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A canonical ticker: recent market activity for one pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticker {
    pub pair: CurrencyPair,
    pub high: Decimal,
    pub low: Decimal,
    pub last: Decimal,
    pub open: Decimal,
    pub volume: Decimal,
    pub timestamp: DateTime<Utc>,
}
