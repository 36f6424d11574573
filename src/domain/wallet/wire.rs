//! Wire types for the balances endpoint.

use serde::{Deserialize, Serialize};

/// Balances response: one sub-record per currency the exchange supports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalancesResponse {
    #[serde(rename = "errorCode")]
    pub error_code: String,
    pub result: String,
    pub krw: BalanceEntry,
    pub bch: BalanceEntry,
    pub btc: BalanceEntry,
    pub etc: BalanceEntry,
    pub eth: BalanceEntry,
    pub qtum: BalanceEntry,
    pub xrp: BalanceEntry,
}

/// Per-currency balance figures, as decimal-valued strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceEntry {
    pub balance: String,
    pub avail: String,
}
