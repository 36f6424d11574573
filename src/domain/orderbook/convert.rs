//! Conversion: order book wire types → OrderBook.

use super::wire;
use super::OrderBook;
use crate::domain::order::LimitOrder;
use crate::error::ExchangeError;
use crate::shared::{ensure_success, CurrencyPair, Side};
use chrono::{DateTime, Utc};

/// Order book timestamps arrive as epoch seconds.
const MILLIS_PER_SECOND: i64 = 1000;

fn instant_from_epoch_secs(raw: &str) -> Result<DateTime<Utc>, ExchangeError> {
    let secs: i64 = raw
        .parse()
        .map_err(|_| ExchangeError::Timestamp(raw.to_string()))?;
    DateTime::<Utc>::from_timestamp_millis(secs * MILLIS_PER_SECOND)
        .ok_or_else(|| ExchangeError::Timestamp(raw.to_string()))
}

fn levels_to_limit_orders(
    entries: Vec<wire::BookEntry>,
    side: Side,
    pair: &CurrencyPair,
) -> Vec<LimitOrder> {
    entries
        .into_iter()
        .map(|entry| LimitOrder {
            side,
            amount: entry.qty,
            pair: pair.clone(),
            id: None,
            created_at: None,
            limit_price: entry.price,
            average_price: None,
            filled_amount: None,
            fee: None,
            status: None,
        })
        .collect()
}

impl TryFrom<(wire::OrderBookResponse, CurrencyPair)> for OrderBook {
    type Error = ExchangeError;

    fn try_from(value: (wire::OrderBookResponse, CurrencyPair)) -> Result<Self, Self::Error> {
        let (source, pair) = value;
        ensure_success(&source.error_code, &source.result)?;

        let timestamp = instant_from_epoch_secs(&source.timestamp)?;
        let asks = levels_to_limit_orders(source.ask, Side::Ask, &pair);
        let bids = levels_to_limit_orders(source.bid, Side::Bid, &pair);

        Ok(OrderBook {
            timestamp,
            asks,
            bids,
        })
    }
}
