//! coincheck-mcp - Coincheck exchange tools for AI agents
//!
//! Exposes market data, balances and order management from the Coincheck REST
//! API as MCP tools over line-delimited JSON-RPC on stdio.

pub mod config;
pub mod error;
pub mod exchange;
pub mod mcp;

pub use config::Credentials;
pub use error::{CoincheckError, ErrorKind, Result};
pub use exchange::{CoincheckClient, Exchange};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
