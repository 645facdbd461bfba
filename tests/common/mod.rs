//! Shared test fixtures: a canned, call-recording `Exchange`

#![allow(dead_code)]

use std::collections::BTreeMap;

use parking_lot::Mutex;

use coincheck_mcp::error::{CoincheckError, Result};
use coincheck_mcp::exchange::*;

/// One recorded downstream call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Ticker(String),
    Trades(String),
    OrderBook(String),
    ExchangeStatus(String),
    OrderRate(String, String, f64, f64),
    Balance,
    AccountInfo,
    Transactions,
    OpenOrders,
    CreateOrder(String, String, f64, f64),
    CancelOrder(i64),
    OrderDetails(i64),
}

#[derive(Default)]
pub struct RecordingExchange {
    calls: Mutex<Vec<Call>>,
    fail_with: Option<String>,
}

impl RecordingExchange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with an API error carrying `message`
    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn last_call(&self) -> Option<Call> {
        self.calls.lock().last().cloned()
    }

    fn record<T>(&self, call: Call, value: T) -> Result<T> {
        self.calls.lock().push(call);
        match &self.fail_with {
            Some(message) => Err(CoincheckError::Api {
                status: 400,
                message: message.clone(),
            }),
            None => Ok(value),
        }
    }
}

impl Exchange for RecordingExchange {
    fn ticker(&self, pair: &str) -> Result<Ticker> {
        self.record(
            Call::Ticker(pair.to_string()),
            Ticker {
                last: 9_500_000.0,
                bid: 9_499_000.0,
                ask: 9_501_000.0,
                high: 9_600_000.0,
                low: 9_300_000.0,
                volume: 123.45,
                timestamp: 1_700_000_000,
            },
        )
    }

    fn trades(&self, pair: &str) -> Result<TradeList> {
        self.record(
            Call::Trades(pair.to_string()),
            TradeList {
                data: vec![Trade {
                    id: 1,
                    amount: 0.5,
                    rate: 9_500_000.0,
                    pair: pair.to_string(),
                    order_type: "buy".to_string(),
                    created_at: "2024-01-01T00:00:00.000Z".to_string(),
                }],
            },
        )
    }

    fn order_book(&self, pair: &str) -> Result<OrderBook> {
        self.record(
            Call::OrderBook(pair.to_string()),
            OrderBook {
                asks: vec![PriceLevel {
                    rate: 9_501_000.0,
                    amount: 0.1,
                }],
                bids: vec![PriceLevel {
                    rate: 9_499_000.0,
                    amount: 0.2,
                }],
            },
        )
    }

    fn exchange_status(&self, pair: &str) -> Result<ExchangeStatus> {
        self.record(
            Call::ExchangeStatus(pair.to_string()),
            ExchangeStatus {
                exchange_status: vec![PairStatus {
                    pair: pair.to_string(),
                    status: "available".to_string(),
                    timestamp: 1_700_000_000,
                    availability: Availability {
                        order: true,
                        market_order: true,
                        cancel: true,
                    },
                }],
            },
        )
    }

    fn order_rate(&self, pair: &str, order_type: &str, price: f64, amount: f64) -> Result<OrderRate> {
        self.record(
            Call::OrderRate(pair.to_string(), order_type.to_string(), price, amount),
            OrderRate {
                rate: 9_500_000.0,
                price,
                amount,
            },
        )
    }

    fn balance(&self) -> Result<Balance> {
        let currencies = BTreeMap::from([("jpy".to_string(), 10_000.0), ("btc".to_string(), 0.5)]);
        self.record(Call::Balance, Balance { currencies })
    }

    fn account_info(&self) -> Result<AccountInfo> {
        self.record(
            Call::AccountInfo,
            AccountInfo {
                id: 10000,
                email: Some("trader@example.com".to_string()),
                ..Default::default()
            },
        )
    }

    fn transactions(&self) -> Result<TransactionList> {
        self.record(Call::Transactions, TransactionList::default())
    }

    fn open_orders(&self) -> Result<OpenOrders> {
        self.record(Call::OpenOrders, OpenOrders::default())
    }

    fn create_order(
        &self,
        pair: &str,
        order_type: &str,
        rate: f64,
        amount: f64,
    ) -> Result<CreatedOrder> {
        self.record(
            Call::CreateOrder(pair.to_string(), order_type.to_string(), rate, amount),
            CreatedOrder {
                id: 12345,
                rate: Some(rate),
                amount: Some(amount),
                order_type: order_type.to_string(),
                pair: pair.to_string(),
                ..Default::default()
            },
        )
    }

    fn cancel_order(&self, order_id: i64) -> Result<CanceledOrder> {
        self.record(Call::CancelOrder(order_id), CanceledOrder { id: order_id })
    }

    fn order_details(&self, order_id: i64) -> Result<OrderDetail> {
        self.record(
            Call::OrderDetails(order_id),
            OrderDetail {
                id: order_id,
                status: "NEW".to_string(),
                ..Default::default()
            },
        )
    }
}
