//! Conversion: trade-history wire types → Trades.

use super::wire;
use super::{Trade, TradeSortType, Trades};
use crate::error::ExchangeError;
use crate::shared::{ensure_success, CurrencyPair};
use chrono::{DateTime, Utc};

/// Trade timestamps arrive as epoch seconds.
const MILLIS_PER_SECOND: i64 = 1000;

fn instant_from_epoch_secs(raw: &str) -> Result<DateTime<Utc>, ExchangeError> {
    let secs: i64 = raw
        .parse()
        .map_err(|_| ExchangeError::Timestamp(raw.to_string()))?;
    DateTime::<Utc>::from_timestamp_millis(secs * MILLIS_PER_SECOND)
        .ok_or_else(|| ExchangeError::Timestamp(raw.to_string()))
}

impl TryFrom<(wire::TradesResponse, CurrencyPair)> for Trades {
    type Error = ExchangeError;

    fn try_from(value: (wire::TradesResponse, CurrencyPair)) -> Result<Self, Self::Error> {
        let (source, pair) = value;
        ensure_success(&source.error_code, &source.result)?;

        let trades = source
            .complete_orders
            .into_iter()
            .map(|entry| {
                Ok(Trade {
                    id: None,
                    amount: entry.qty,
                    pair: pair.clone(),
                    price: entry.price,
                    timestamp: instant_from_epoch_secs(&entry.timestamp)?,
                    order_id: None,
                })
            })
            .collect::<Result<Vec<_>, ExchangeError>>()?;

        Ok(Trades {
            trades,
            sort: TradeSortType::ByTimestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn entry(qty: &str, price: &str, ts: &str) -> wire::TradeEntry {
        wire::TradeEntry {
            qty: Decimal::from_str(qty).unwrap(),
            price: Decimal::from_str(price).unwrap(),
            timestamp: ts.to_string(),
        }
    }

    fn sample_response() -> wire::TradesResponse {
        wire::TradesResponse {
            error_code: "0".to_string(),
            result: "success".to_string(),
            complete_orders: vec![
                entry("0.1", "5616000", "1000"),
                entry("2", "5615000", "1001"),
            ],
        }
    }

    #[test]
    fn test_trades_preserve_input_order() {
        let trades =
            Trades::try_from((sample_response(), CurrencyPair::krw_quote("btc"))).unwrap();
        assert_eq!(trades.trades.len(), 2);
        assert_eq!(trades.sort, TradeSortType::ByTimestamp);

        let first = &trades.trades[0];
        assert_eq!(first.amount, Decimal::from_str("0.1").unwrap());
        assert_eq!(first.price, Decimal::from_str("5616000").unwrap());
        assert_eq!(first.timestamp.timestamp_millis(), 1_000_000);
        assert_eq!(first.id, None);
        assert_eq!(first.order_id, None);
        assert_eq!(first.pair.to_string(), "BTC/KRW");

        assert_eq!(trades.trades[1].timestamp.timestamp_millis(), 1_001_000);
    }

    #[test]
    fn test_error_envelope_raises() {
        let mut resp = sample_response();
        resp.error_code = "4".to_string();
        resp.result = "Blocked user access".to_string();
        let err = Trades::try_from((resp, CurrencyPair::krw_quote("btc"))).unwrap_err();
        match err {
            ExchangeError::Response(msg) => assert_eq!(msg, "Blocked user access"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
