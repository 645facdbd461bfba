//! Coincheck exchange access
//!
//! [`Exchange`] is the seam between tool dispatch and the network. The
//! production implementation is [`CoincheckClient`]; tests plug in stubs.

pub mod client;
pub mod signer;
pub mod types;

pub use client::CoincheckClient;
pub use signer::{NonceGenerator, RequestSigner};
pub use types::*;

use crate::error::Result;

/// One method per exchange capability. Every call is a single round-trip.
pub trait Exchange: Send + Sync {
    // Public market data
    fn ticker(&self, pair: &str) -> Result<Ticker>;
    fn trades(&self, pair: &str) -> Result<TradeList>;
    fn order_book(&self, pair: &str) -> Result<OrderBook>;
    fn exchange_status(&self, pair: &str) -> Result<ExchangeStatus>;
    fn order_rate(&self, pair: &str, order_type: &str, price: f64, amount: f64)
        -> Result<OrderRate>;

    // Account
    fn balance(&self) -> Result<Balance>;
    fn account_info(&self) -> Result<AccountInfo>;

    // Trading
    fn transactions(&self) -> Result<TransactionList>;
    fn open_orders(&self) -> Result<OpenOrders>;
    fn create_order(&self, pair: &str, order_type: &str, rate: f64, amount: f64)
        -> Result<CreatedOrder>;
    fn cancel_order(&self, order_id: i64) -> Result<CanceledOrder>;
    fn order_details(&self, order_id: i64) -> Result<OrderDetail>;
}
