//! Conversion: order-info wire types → LimitOrder.

use super::wire;
use super::{LimitOrder, OrderStatus};
use crate::error::ExchangeError;
use crate::shared::{CurrencyPair, Side};
use chrono::{DateTime, Utc};
use tracing::warn;

impl TryFrom<wire::OrderInfoResponse> for LimitOrder {
    type Error = ExchangeError;

    fn try_from(source: wire::OrderInfoResponse) -> Result<Self, Self::Error> {
        // Closed, exact match; the exchange documents no other values, so
        // anything unrecognized is treated as canceled.
        let status = match source.status.as_str() {
            "live" => OrderStatus::New,
            "filled" => OrderStatus::Filled,
            "partially_filled" => OrderStatus::PartiallyFilled,
            other => {
                if !other.is_empty() {
                    warn!(status = other, "unrecognized order status, treating as canceled");
                }
                OrderStatus::Canceled
            }
        };

        let info = source.info;

        let side = match info.side.as_str() {
            "ask" => Side::Ask,
            other => {
                if other != "bid" {
                    warn!(side = other, "unrecognized order side, treating as bid");
                }
                Side::Bid
            }
        };

        if info.remain_qty > info.qty {
            return Err(ExchangeError::Validation(format!(
                "remaining quantity {} exceeds order quantity {}",
                info.remain_qty, info.qty
            )));
        }
        let filled_amount = info.qty - info.remain_qty;

        // Already epoch milliseconds; no seconds factor, unlike the
        // market-data endpoints.
        let created_at = DateTime::<Utc>::from_timestamp_millis(info.timestamp)
            .ok_or_else(|| ExchangeError::Timestamp(info.timestamp.to_string()))?;

        Ok(LimitOrder {
            side,
            amount: info.qty,
            pair: CurrencyPair::krw_quote(info.currency),
            id: Some(info.order_id),
            created_at: Some(created_at),
            limit_price: info.price,
            // No weighted-average fill price is available from this endpoint.
            average_price: Some(info.price),
            filled_amount: Some(filled_amount),
            fee: Some(info.fee),
            status: Some(status),
        })
    }
}
