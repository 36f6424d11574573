//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — canonical domain types (the exchange-agnostic target schema)
//! - `wire.rs` — raw serde structs matching Coinone responses
//! - `convert.rs` — `TryFrom` conversions with envelope + value validation

pub mod order;
pub mod orderbook;
pub mod ticker;
pub mod trade;
pub mod wallet;
