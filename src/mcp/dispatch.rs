//! Tool dispatch: tool name + loose arguments -> one exchange call

use serde::Serialize;
use serde_json::{Map, Value};

use super::tools::names;
use crate::error::{CoincheckError, Result};
use crate::exchange::Exchange;

pub const DEFAULT_PAIR: &str = "btc_jpy";

/// Tool arguments as sent by the client.
///
/// Every accessor applies the same lenient policy: a missing key or a value of
/// the wrong JSON type yields the caller's default instead of an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArgs(Map<String, Value>);

impl ToolArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// `params.arguments`, or an empty map when absent or not an object
    pub fn from_params(params: &Value) -> Self {
        match params.get("arguments") {
            Some(Value::Object(map)) => Self(map.clone()),
            _ => Self::default(),
        }
    }

    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.0.get(key) {
            Some(Value::String(s)) => s.as_str(),
            _ => default,
        }
    }

    pub fn f64_or(&self, key: &str, default: f64) -> f64 {
        match self.0.get(key) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
            _ => default,
        }
    }

    /// Any JSON number, truncated toward zero. Numeric strings are not parsed.
    pub fn i64_or(&self, key: &str, default: i64) -> i64 {
        match self.0.get(key) {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or(default),
            _ => default,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ToolArgs {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Value> for ToolArgs {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

/// Every tool name the dispatcher accepts
pub const SUPPORTED_TOOLS: &[&str] = &[
    names::GET_TICKER,
    names::GET_TRADES,
    names::GET_ORDER_BOOK,
    names::GET_EXCHANGE_STATUS,
    names::CALCULATE_ORDER_RATE,
    names::GET_BALANCE,
    names::GET_ACCOUNT_INFO,
    names::GET_TRANSACTION_HISTORY,
    names::GET_OPEN_ORDERS,
    names::CREATE_ORDER,
    names::CANCEL_ORDER,
    names::GET_ORDER_DETAILS,
];

/// Routes tool calls to an [`Exchange`]
pub struct Dispatcher<'a> {
    exchange: &'a dyn Exchange,
}

impl<'a> Dispatcher<'a> {
    pub fn new(exchange: &'a dyn Exchange) -> Self {
        Self { exchange }
    }

    pub fn dispatch(&self, tool_name: &str, args: &ToolArgs) -> Result<Value> {
        let ex = self.exchange;
        match tool_name {
            // Market data
            names::GET_TICKER => to_json(ex.ticker(args.str_or("pair", DEFAULT_PAIR))?),
            names::GET_TRADES => to_json(ex.trades(args.str_or("pair", DEFAULT_PAIR))?),
            names::GET_ORDER_BOOK => to_json(ex.order_book(args.str_or("pair", DEFAULT_PAIR))?),
            names::GET_EXCHANGE_STATUS => {
                to_json(ex.exchange_status(args.str_or("pair", DEFAULT_PAIR))?)
            }
            names::CALCULATE_ORDER_RATE => to_json(ex.order_rate(
                args.str_or("pair", DEFAULT_PAIR),
                args.str_or("order_type", ""),
                args.f64_or("price", 0.0),
                args.f64_or("amount", 0.0),
            )?),

            // Account
            names::GET_BALANCE => to_json(ex.balance()?),
            names::GET_ACCOUNT_INFO => to_json(ex.account_info()?),

            // Trading
            names::GET_TRANSACTION_HISTORY => to_json(ex.transactions()?),
            names::GET_OPEN_ORDERS => to_json(ex.open_orders()?),
            names::CREATE_ORDER => to_json(ex.create_order(
                args.str_or("pair", DEFAULT_PAIR),
                args.str_or("order_type", ""),
                args.f64_or("rate", 0.0),
                args.f64_or("amount", 0.0),
            )?),
            names::CANCEL_ORDER => to_json(ex.cancel_order(args.i64_or("order_id", 0))?),
            names::GET_ORDER_DETAILS => to_json(ex.order_details(args.i64_or("order_id", 0))?),

            _ => Err(CoincheckError::UnknownTool(tool_name.to_string())),
        }
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
