//! Conversion: balances wire types → Wallet.

use super::wire;
use super::{Balance, Wallet};
use crate::error::ExchangeError;
use crate::shared::{ensure_success, Currency};
use rust_decimal::Decimal;
use std::str::FromStr;

type EntryAccessor = fn(&wire::BalancesResponse) -> &wire::BalanceEntry;

/// The currencies Coinone reports, in the order the wallet emits them.
///
/// Adding a listing means adding a row here (and the matching wire field);
/// the response shape itself is the real scalability limit, since the
/// exchange enumerates currencies as named fields rather than a map.
const SUPPORTED_CURRENCIES: &[(&str, EntryAccessor)] = &[
    ("KRW", |r| &r.krw),
    ("BCH", |r| &r.bch),
    ("BTC", |r| &r.btc),
    ("ETC", |r| &r.etc),
    ("ETH", |r| &r.eth),
    ("QTUM", |r| &r.qtum),
    ("XRP", |r| &r.xrp),
];

impl TryFrom<wire::BalancesResponse> for Wallet {
    type Error = ExchangeError;

    fn try_from(source: wire::BalancesResponse) -> Result<Self, Self::Error> {
        ensure_success(&source.error_code, &source.result)?;

        let balances = SUPPORTED_CURRENCIES
            .iter()
            .map(|(code, entry_of)| {
                let entry = entry_of(&source);
                Ok(Balance {
                    currency: Currency::new(code),
                    total: Decimal::from_str(&entry.balance)?,
                    available: Decimal::from_str(&entry.avail)?,
                })
            })
            .collect::<Result<Vec<_>, ExchangeError>>()?;

        Ok(Wallet { balances })
    }
}
