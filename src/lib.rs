//! # Coinone SDK core
//!
//! Normalizes Coinone's proprietary wire-format responses into a canonical,
//! exchange-agnostic trading domain model.
//!
//! ## Architecture
//!
//! The crate is organized as vertical slices under [`domain`]:
//!
//! - `wire.rs` — raw serde structs matching Coinone responses
//! - `convert.rs` — `TryFrom` conversions with envelope + value validation
//! - `mod.rs` — canonical domain types consumed by the rest of a trading stack
//!
//! Every conversion is a pure, synchronous function: no I/O, no caching, no
//! shared state. Transport, signing, rate limiting, and retry policy live in
//! the layers above; this crate is only the point where raw numeric strings,
//! exchange status codes, and per-endpoint error conventions become typed,
//! validated domain values.
//!
//! ## Quick Start
//!
//! ```rust
//! use coinone_sdk::prelude::*;
//! use coinone_sdk::domain::ticker::wire::TickerResponse;
//!
//! let raw: TickerResponse = serde_json::from_str(
//!     r#"{"currency":"btc","timestamp":"1000","high":"100","low":"90",
//!         "last":"95","first":"92","volume":"10"}"#,
//! )?;
//!
//! let ticker = Ticker::try_from(raw)?;
//! assert_eq!(ticker.pair.to_string(), "BTC/KRW");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Shared newtypes used across all domains: currencies, pairs, sides, and the
/// response envelope check.
pub mod shared;

/// Domain modules (vertical slices): canonical types, wire types, conversions.
pub mod domain;

/// Unified error types.
pub mod error;

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Currency, CurrencyPair, Side};

    // Domain types — order book
    pub use crate::domain::orderbook::OrderBook;

    // Domain types — order
    pub use crate::domain::order::{LimitOrder, OrderStatus};

    // Domain types — market data
    pub use crate::domain::ticker::Ticker;
    pub use crate::domain::trade::{Trade, TradeSortType, Trades};

    // Domain types — account
    pub use crate::domain::wallet::{Balance, Wallet};

    // Errors
    pub use crate::error::ExchangeError;
}
