//! Wallet domain — account balance normalization.

mod convert;
pub mod wire;

use crate::shared::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single per-currency balance: total holdings vs. available for trading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Balance {
    pub currency: Currency,
    pub total: Decimal,
    pub available: Decimal,
}

/// A canonical wallet: one [`Balance`] per supported currency, in a fixed
/// order. Currencies the account does not hold still appear with zero values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wallet {
    pub balances: Vec<Balance>,
}
