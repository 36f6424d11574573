//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format Coinone sends, so they can be used directly
//! in wire types without conversion overhead.

pub mod envelope;

pub use envelope::{ensure_success, SUCCESS_CODE};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── Currency ────────────────────────────────────────────────────────────────

/// A currency code, case-normalized to uppercase (e.g. `"BTC"`, `"KRW"`).
///
/// Coinone payloads spell currency codes in lowercase; the canonical model
/// uses uppercase everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().to_uppercase())
    }

    /// The exchange's fixed quote currency (its local fiat unit).
    pub fn krw() -> Self {
        Self("KRW".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Currency {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Currency::new(s))
    }
}

// ─── CurrencyPair ────────────────────────────────────────────────────────────

/// A base/quote currency combination defining a tradable market.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub base: Currency,
    pub quote: Currency,
}

impl CurrencyPair {
    pub fn new(base: Currency, quote: Currency) -> Self {
        Self { base, quote }
    }

    /// Build a pair against the exchange's fixed KRW quote.
    ///
    /// Coinone markets are all quoted in KRW; payloads only carry the base
    /// currency code.
    pub fn krw_quote(base: impl Into<Currency>) -> Self {
        Self {
            base: base.into(),
            quote: Currency::krw(),
        }
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

// ─── Side ────────────────────────────────────────────────────────────────────

/// Order side: Bid (buy) or Ask (sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Bid,
    Ask,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Side::Bid => write!(f, "Buy"),
            Side::Ask => write!(f, "Sell"),
        }
    }
}
