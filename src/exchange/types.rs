//! Coincheck REST response types
//!
//! Coincheck encodes most amounts as numeric strings and some as JSON numbers,
//! sometimes both for the same field across endpoints. Numeric fields go through
//! [`flexible`] so either form decodes.

use std::collections::BTreeMap;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Deserializers that accept a JSON number or a numeric string
pub mod flexible {
    use super::*;

    pub(crate) fn number(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        number(&value)
            .ok_or_else(|| de::Error::custom(format!("expected numeric value, got {}", value)))
    }

    pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Null => Ok(None),
            other => number(&other)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("expected numeric value, got {}", other))),
        }
    }

    pub fn i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match &value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
        .ok_or_else(|| de::Error::custom(format!("expected integer value, got {}", value)))
    }
}

/// Latest ticker for a pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticker {
    #[serde(deserialize_with = "flexible::f64")]
    pub last: f64,
    #[serde(deserialize_with = "flexible::f64")]
    pub bid: f64,
    #[serde(deserialize_with = "flexible::f64")]
    pub ask: f64,
    #[serde(deserialize_with = "flexible::f64")]
    pub high: f64,
    #[serde(deserialize_with = "flexible::f64")]
    pub low: f64,
    #[serde(deserialize_with = "flexible::f64")]
    pub volume: f64,
    #[serde(deserialize_with = "flexible::i64")]
    pub timestamp: i64,
}

/// A public trade
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trade {
    #[serde(deserialize_with = "flexible::i64")]
    pub id: i64,
    #[serde(deserialize_with = "flexible::f64")]
    pub amount: f64,
    #[serde(deserialize_with = "flexible::f64")]
    pub rate: f64,
    pub pair: String,
    pub order_type: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeList {
    pub data: Vec<Trade>,
}

/// One side of the book at a single price
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PriceLevel {
    pub rate: f64,
    pub amount: f64,
}

// The wire form is a `[rate, amount]` pair
impl<'de> Deserialize<'de> for PriceLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (rate, amount): (Value, Value) = Deserialize::deserialize(deserializer)?;
        let rate = flexible::number(&rate)
            .ok_or_else(|| de::Error::custom(format!("invalid order book rate: {}", rate)))?;
        let amount = flexible::number(&amount)
            .ok_or_else(|| de::Error::custom(format!("invalid order book amount: {}", amount)))?;
        Ok(Self { rate, amount })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderBook {
    pub asks: Vec<PriceLevel>,
    pub bids: Vec<PriceLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Availability {
    pub order: bool,
    pub market_order: bool,
    pub cancel: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairStatus {
    pub pair: String,
    pub status: String,
    #[serde(deserialize_with = "flexible::i64")]
    pub timestamp: i64,
    pub availability: Availability,
}

/// Exchange availability per pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeStatus {
    pub exchange_status: Vec<PairStatus>,
}

/// Result of the order rate calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRate {
    #[serde(deserialize_with = "flexible::f64")]
    pub rate: f64,
    #[serde(deserialize_with = "flexible::f64")]
    pub price: f64,
    #[serde(deserialize_with = "flexible::f64")]
    pub amount: f64,
}

/// Account balance, keyed by currency (`jpy`, `btc`, `btc_reserved`, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Balance {
    pub currencies: BTreeMap<String, f64>,
}

impl Balance {
    pub fn get(&self, currency: &str) -> Option<f64> {
        self.currencies.get(currency).copied()
    }
}

// The wire form is a flat object mixing the `success` flag with per-currency amounts
impl<'de> Deserialize<'de> for Balance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: BTreeMap<String, Value> = Deserialize::deserialize(deserializer)?;
        let currencies = raw
            .into_iter()
            .filter(|(key, _)| key != "success")
            .filter_map(|(key, value)| flexible::number(&value).map(|n| (key, n)))
            .collect();
        Ok(Self { currencies })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountInfo {
    #[serde(deserialize_with = "flexible::i64")]
    pub id: i64,
    pub email: Option<String>,
    pub identity_status: Option<String>,
    pub bitcoin_address: Option<String>,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub taker_fee: Option<f64>,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub maker_fee: Option<f64>,
    pub exchange_fees: BTreeMap<String, Value>,
}

/// A fill on one of the account's orders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    #[serde(deserialize_with = "flexible::i64")]
    pub id: i64,
    #[serde(deserialize_with = "flexible::i64")]
    pub order_id: i64,
    pub created_at: String,
    pub funds: BTreeMap<String, Value>,
    pub pair: String,
    #[serde(deserialize_with = "flexible::f64")]
    pub rate: f64,
    pub fee_currency: Option<String>,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub fee: Option<f64>,
    pub liquidity: String,
    pub side: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionList {
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenOrder {
    #[serde(deserialize_with = "flexible::i64")]
    pub id: i64,
    pub order_type: String,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub rate: Option<f64>,
    pub pair: String,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub pending_amount: Option<f64>,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub pending_market_buy_amount: Option<f64>,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub stop_loss_rate: Option<f64>,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenOrders {
    pub orders: Vec<OpenOrder>,
}

/// Receipt for a newly placed order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedOrder {
    #[serde(deserialize_with = "flexible::i64")]
    pub id: i64,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub rate: Option<f64>,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub amount: Option<f64>,
    pub order_type: String,
    pub time_in_force: Option<String>,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub stop_loss_rate: Option<f64>,
    pub pair: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanceledOrder {
    #[serde(deserialize_with = "flexible::i64")]
    pub id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderDetail {
    #[serde(deserialize_with = "flexible::i64")]
    pub id: i64,
    pub pair: String,
    pub order_type: String,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub rate: Option<f64>,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub stop_loss_rate: Option<f64>,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub maker_fee_rate: Option<f64>,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub taker_fee_rate: Option<f64>,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub market_buy_amount: Option<f64>,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub executed_amount: Option<f64>,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub executed_market_buy_amount: Option<f64>,
    #[serde(deserialize_with = "flexible::opt_f64")]
    pub expected_amount: Option<f64>,
    pub status: String,
    pub created_at: String,
}
