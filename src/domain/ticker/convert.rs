//! Conversion: ticker wire types → Ticker.

use super::wire;
use super::Ticker;
use crate::error::ExchangeError;
use crate::shared::CurrencyPair;
use chrono::{DateTime, Utc};

/// Ticker timestamps arrive as epoch seconds.
const MILLIS_PER_SECOND: i64 = 1000;

fn instant_from_epoch_secs(raw: &str) -> Result<DateTime<Utc>, ExchangeError> {
    let secs: i64 = raw
        .parse()
        .map_err(|_| ExchangeError::Timestamp(raw.to_string()))?;
    DateTime::<Utc>::from_timestamp_millis(secs * MILLIS_PER_SECOND)
        .ok_or_else(|| ExchangeError::Timestamp(raw.to_string()))
}

impl TryFrom<wire::TickerResponse> for Ticker {
    type Error = ExchangeError;

    fn try_from(source: wire::TickerResponse) -> Result<Self, Self::Error> {
        Ok(Ticker {
            pair: CurrencyPair::krw_quote(source.currency),
            high: source.high,
            low: source.low,
            last: source.last,
            open: source.first,
            volume: source.volume,
            timestamp: instant_from_epoch_secs(&source.timestamp)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample_response() -> wire::TickerResponse {
        wire::TickerResponse {
            currency: "btc".to_string(),
            timestamp: "1000".to_string(),
            high: Decimal::new(100, 0),
            low: Decimal::new(90, 0),
            last: Decimal::new(95, 0),
            first: Decimal::new(92, 0),
            volume: Decimal::new(10, 0),
        }
    }

    #[test]
    fn test_ticker_conversion() {
        let ticker = Ticker::try_from(sample_response()).unwrap();
        assert_eq!(ticker.pair.to_string(), "BTC/KRW");
        assert_eq!(ticker.high, Decimal::new(100, 0));
        assert_eq!(ticker.low, Decimal::new(90, 0));
        assert_eq!(ticker.last, Decimal::new(95, 0));
        assert_eq!(ticker.open, Decimal::new(92, 0));
        assert_eq!(ticker.volume, Decimal::new(10, 0));
        assert_eq!(ticker.timestamp.timestamp_millis(), 1_000_000);
    }

    #[test]
    fn test_malformed_timestamp_fails() {
        let mut resp = sample_response();
        resp.timestamp = "soon".to_string();
        assert!(matches!(
            Ticker::try_from(resp).unwrap_err(),
            ExchangeError::Timestamp(_)
        ));
    }
}
