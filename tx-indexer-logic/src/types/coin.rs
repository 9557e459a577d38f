use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::codec::proto;

lazy_static! {
    static ref COIN_REGEX: Regex =
        Regex::new(r"^([0-9]+(?:\.[0-9]+)?)([a-zA-Z][a-zA-Z0-9/:._-]{0,127})$").unwrap();
}

/// Amounts are stored as floating point numbers, denominations are lowercase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: f64,
}

impl Coin {
    pub fn new(denom: impl AsRef<str>, amount: f64) -> Self {
        Self {
            denom: denom.as_ref().to_lowercase(),
            amount,
        }
    }

    pub fn from_proto(coin: &proto::Coin) -> Self {
        Self::new(&coin.denom, parse_amount(&coin.amount))
    }

    /// Parses a single `<amount><denom>` item, e.g. `100.5iris-atto`.
    pub fn parse(value: &str) -> Option<Self> {
        let captures = COIN_REGEX.captures(value.trim())?;
        let amount = captures[1].parse::<f64>().ok()?;
        Some(Self::new(&captures[2], amount))
    }
}

/// Parses a comma separated list of coins as emitted in tx tags.
/// Items that cannot be parsed are skipped.
pub fn parse_coins(value: &str) -> Vec<Coin> {
    value
        .split(',')
        .filter(|item| !item.trim().is_empty())
        .filter_map(|item| {
            let coin = Coin::parse(item);
            if coin.is_none() {
                tracing::warn!(item, "skipping unparsable coin");
            }
            coin
        })
        .collect()
}

pub fn coins_from_proto(coins: &[proto::Coin]) -> Vec<Coin> {
    coins.iter().map(Coin::from_proto).collect()
}

/// Decimal strings such as share amounts (`"10.5000000000"`).
pub(crate) fn parse_amount(value: &str) -> f64 {
    if value.is_empty() {
        return 0.0;
    }
    value.trim().parse::<f64>().unwrap_or_else(|err| {
        tracing::warn!(value, error = %err, "invalid decimal amount, using zero");
        0.0
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fee {
    pub amount: Vec<Coin>,
    pub gas: i64,
}

impl Fee {
    pub fn from_proto(fee: Option<&proto::Fee>) -> Self {
        match fee {
            Some(fee) => Self {
                amount: coins_from_proto(&fee.amount),
                gas: i64::try_from(fee.gas).unwrap_or(i64::MAX),
            },
            None => Self::default(),
        }
    }

    /// Returns `(gas_price, actual_fee)`.
    ///
    /// The price is the first fee coin divided by `gas_wanted`; the actual fee is
    /// `gas_used` (capped at `gas_wanted`) times the price, in the first fee denomination.
    pub fn gas_price_and_actual_fee(&self, gas_wanted: i64, gas_used: i64) -> (f64, ActualFee) {
        let Some(first) = self.amount.first() else {
            return (0.0, ActualFee::default());
        };
        let gas_price = if gas_wanted > 0 {
            first.amount / gas_wanted as f64
        } else {
            0.0
        };
        let gas_used = gas_used.min(gas_wanted).max(0);
        let actual_fee = ActualFee {
            denom: first.denom.clone(),
            amount: gas_used as f64 * gas_price,
        };
        (gas_price, actual_fee)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActualFee {
    pub denom: String,
    pub amount: f64,
}
