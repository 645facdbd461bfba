//! MCP tool definitions for coincheck-mcp

use serde_json::json;

use super::protocol::ToolDefinition;

/// Tool names, shared by the catalog and the dispatcher
pub mod names {
    pub const GET_TICKER: &str = "get_ticker";
    pub const GET_TRADES: &str = "get_trades";
    pub const GET_ORDER_BOOK: &str = "get_order_book";
    pub const GET_EXCHANGE_STATUS: &str = "get_exchange_status";
    pub const CALCULATE_ORDER_RATE: &str = "calculate_order_rate";
    pub const GET_BALANCE: &str = "get_balance";
    pub const GET_ACCOUNT_INFO: &str = "get_account_info";
    pub const GET_TRANSACTION_HISTORY: &str = "get_transaction_history";
    pub const GET_OPEN_ORDERS: &str = "get_open_orders";
    pub const CREATE_ORDER: &str = "create_order";
    pub const CANCEL_ORDER: &str = "cancel_order";
    pub const GET_ORDER_DETAILS: &str = "get_order_details";
}

/// All tool definitions for coincheck-mcp
pub const TOOL_DEFINITIONS: &[(&str, &str, &str)] = &[
    // Market data
    (
        names::GET_TICKER,
        "Get current ticker information for a trading pair",
        r#"{
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "pair": {"type": "string", "description": "Trading pair (e.g., btc_jpy, eth_jpy)", "default": "btc_jpy"}
            }
        }"#,
    ),
    (
        names::GET_TRADES,
        "Get recent trades for a trading pair",
        r#"{
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "pair": {"type": "string", "description": "Trading pair (e.g., btc_jpy, eth_jpy)", "default": "btc_jpy"}
            }
        }"#,
    ),
    (
        names::GET_ORDER_BOOK,
        "Get order book (bids and asks) for a trading pair",
        r#"{
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "pair": {"type": "string", "description": "Trading pair (e.g., btc_jpy, eth_jpy)", "default": "btc_jpy"}
            }
        }"#,
    ),
    (
        names::GET_EXCHANGE_STATUS,
        "Get exchange availability status for a trading pair",
        r#"{
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "pair": {"type": "string", "description": "Trading pair (e.g., btc_jpy, eth_jpy)", "default": "btc_jpy"}
            }
        }"#,
    ),
    (
        names::CALCULATE_ORDER_RATE,
        "Calculate the rate for a buy/sell order",
        r#"{
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "pair": {"type": "string", "description": "Trading pair (e.g., btc_jpy)", "default": "btc_jpy"},
                "order_type": {"type": "string", "description": "Order type (buy or sell)", "enum": ["buy", "sell"]},
                "price": {"type": "number", "description": "Price per unit"},
                "amount": {"type": "number", "description": "Amount to buy/sell"}
            },
            "required": ["order_type", "price", "amount"]
        }"#,
    ),
    // Account
    (
        names::GET_BALANCE,
        "Get account balance per currency",
        r#"{
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {}
        }"#,
    ),
    (
        names::GET_ACCOUNT_INFO,
        "Get account information (fees, identity status, deposit address)",
        r#"{
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {}
        }"#,
    ),
    // Trading
    (
        names::GET_TRANSACTION_HISTORY,
        "Get the account's recent transaction history",
        r#"{
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {}
        }"#,
    ),
    (
        names::GET_OPEN_ORDERS,
        "Get list of open (unfilled) orders",
        r#"{
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {}
        }"#,
    ),
    (
        names::CREATE_ORDER,
        "Create a new buy/sell order",
        r#"{
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "pair": {"type": "string", "description": "Trading pair (e.g., btc_jpy)", "default": "btc_jpy"},
                "order_type": {"type": "string", "description": "Order type (buy or sell)", "enum": ["buy", "sell"]},
                "rate": {"type": "number", "description": "Order rate (price per unit)"},
                "amount": {"type": "number", "description": "Amount to buy/sell"}
            },
            "required": ["order_type", "rate", "amount"]
        }"#,
    ),
    (
        names::CANCEL_ORDER,
        "Cancel an existing order",
        r#"{
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "order_id": {"type": "number", "description": "Order ID to cancel"}
            },
            "required": ["order_id"]
        }"#,
    ),
    (
        names::GET_ORDER_DETAILS,
        "Get details of a specific order",
        r#"{
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "order_id": {"type": "number", "description": "Order ID to retrieve"}
            },
            "required": ["order_id"]
        }"#,
    ),
];

/// Get all tool definitions as ToolDefinition structs
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    TOOL_DEFINITIONS
        .iter()
        .map(|(name, description, schema)| ToolDefinition {
            name: name.to_string(),
            description: description.to_string(),
            input_schema: serde_json::from_str(schema).unwrap_or(json!({})),
        })
        .collect()
}
