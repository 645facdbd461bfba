//! Dispatcher tests against a recording exchange
//!
//! Run with: cargo test --test dispatch_tests

mod common;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use coincheck_mcp::error::ErrorKind;
use coincheck_mcp::mcp::{get_tool_definitions, names, Dispatcher, ToolArgs};
use common::{Call, RecordingExchange};

fn dispatch(exchange: &RecordingExchange, tool: &str, args: Value) -> coincheck_mcp::Result<Value> {
    Dispatcher::new(exchange).dispatch(tool, &ToolArgs::from(args))
}

/// Only the schema's required arguments, with plausible values
fn required_args(schema: &Value) -> Value {
    let mut args = serde_json::Map::new();
    if let Some(required) = schema.get("required").and_then(|r| r.as_array()) {
        for field in required.iter().filter_map(|f| f.as_str()) {
            let value = match schema["properties"][field]["type"].as_str() {
                Some("number") => json!(1),
                _ => json!("buy"),
            };
            args.insert(field.to_string(), value);
        }
    }
    Value::Object(args)
}

#[test]
fn every_catalog_tool_dispatches_with_required_args() {
    let exchange = RecordingExchange::new();
    let tools = get_tool_definitions();
    for tool in &tools {
        let result = dispatch(&exchange, &tool.name, required_args(&tool.input_schema));
        assert!(result.is_ok(), "{} failed: {:?}", tool.name, result.err());
    }
    assert_eq!(exchange.calls().len(), tools.len());
}

#[test]
fn ticker_default_pair_matches_explicit_pair() {
    let exchange = RecordingExchange::new();
    let implicit = dispatch(&exchange, names::GET_TICKER, json!({})).unwrap();
    let explicit = dispatch(&exchange, names::GET_TICKER, json!({"pair": "btc_jpy"})).unwrap();

    assert_eq!(implicit, explicit);
    assert_eq!(
        exchange.calls(),
        vec![
            Call::Ticker("btc_jpy".to_string()),
            Call::Ticker("btc_jpy".to_string())
        ]
    );
}

#[test]
fn pair_is_forwarded_for_market_tools() {
    let exchange = RecordingExchange::new();
    let args = json!({"pair": "eth_jpy"});
    dispatch(&exchange, names::GET_TRADES, args.clone()).unwrap();
    dispatch(&exchange, names::GET_ORDER_BOOK, args.clone()).unwrap();
    dispatch(&exchange, names::GET_EXCHANGE_STATUS, args).unwrap();

    assert_eq!(
        exchange.calls(),
        vec![
            Call::Trades("eth_jpy".to_string()),
            Call::OrderBook("eth_jpy".to_string()),
            Call::ExchangeStatus("eth_jpy".to_string()),
        ]
    );
}

#[test]
fn non_string_pair_falls_back_to_default() {
    let exchange = RecordingExchange::new();
    dispatch(&exchange, names::GET_TRADES, json!({"pair": 42})).unwrap();
    assert_eq!(exchange.last_call(), Some(Call::Trades("btc_jpy".to_string())));
}

#[test]
fn create_order_forwards_exact_values() {
    let exchange = RecordingExchange::new();
    let result = dispatch(
        &exchange,
        names::CREATE_ORDER,
        json!({"order_type": "buy", "rate": 100.5, "amount": 0.01}),
    )
    .unwrap();

    assert_eq!(
        exchange.last_call(),
        Some(Call::CreateOrder(
            "btc_jpy".to_string(),
            "buy".to_string(),
            100.5,
            0.01
        ))
    );
    assert_eq!(result["id"], json!(12345));
}

#[test]
fn create_order_string_numbers_become_zero() {
    let exchange = RecordingExchange::new();
    dispatch(
        &exchange,
        names::CREATE_ORDER,
        json!({"pair": "eth_jpy", "order_type": "sell", "rate": "100.5", "amount": "0.01"}),
    )
    .unwrap();

    assert_eq!(
        exchange.last_call(),
        Some(Call::CreateOrder(
            "eth_jpy".to_string(),
            "sell".to_string(),
            0.0,
            0.0
        ))
    );
}

#[test]
fn calculate_order_rate_forwards_arguments() {
    let exchange = RecordingExchange::new();
    dispatch(
        &exchange,
        names::CALCULATE_ORDER_RATE,
        json!({"order_type": "sell", "price": 9500000, "amount": 0.25}),
    )
    .unwrap();

    assert_eq!(
        exchange.last_call(),
        Some(Call::OrderRate(
            "btc_jpy".to_string(),
            "sell".to_string(),
            9_500_000.0,
            0.25
        ))
    );
}

#[test]
fn missing_order_type_defaults_to_empty_string() {
    let exchange = RecordingExchange::new();
    dispatch(&exchange, names::CALCULATE_ORDER_RATE, json!({})).unwrap();
    assert_eq!(
        exchange.last_call(),
        Some(Call::OrderRate("btc_jpy".to_string(), String::new(), 0.0, 0.0))
    );
}

#[test]
fn cancel_order_numeric_id() {
    let exchange = RecordingExchange::new();
    let result = dispatch(&exchange, names::CANCEL_ORDER, json!({"order_id": 42})).unwrap();
    assert_eq!(exchange.last_call(), Some(Call::CancelOrder(42)));
    assert_eq!(result, json!({"id": 42}));
}

#[test]
fn cancel_order_string_id_is_silently_zero() {
    let exchange = RecordingExchange::new();
    dispatch(&exchange, names::CANCEL_ORDER, json!({"order_id": "42"})).unwrap();
    assert_eq!(exchange.last_call(), Some(Call::CancelOrder(0)));
}

#[test]
fn order_details_float_id_truncates() {
    let exchange = RecordingExchange::new();
    dispatch(&exchange, names::GET_ORDER_DETAILS, json!({"order_id": 77.0})).unwrap();
    assert_eq!(exchange.last_call(), Some(Call::OrderDetails(77)));
}

#[test]
fn account_tools_take_no_arguments() {
    let exchange = RecordingExchange::new();
    let ignored = json!({"pair": "eth_jpy", "junk": true});
    dispatch(&exchange, names::GET_BALANCE, ignored.clone()).unwrap();
    dispatch(&exchange, names::GET_ACCOUNT_INFO, ignored.clone()).unwrap();
    dispatch(&exchange, names::GET_TRANSACTION_HISTORY, ignored.clone()).unwrap();
    dispatch(&exchange, names::GET_OPEN_ORDERS, ignored).unwrap();

    assert_eq!(
        exchange.calls(),
        vec![
            Call::Balance,
            Call::AccountInfo,
            Call::Transactions,
            Call::OpenOrders
        ]
    );
}

#[test]
fn balance_serializes_as_currency_map() {
    let exchange = RecordingExchange::new();
    let result = dispatch(&exchange, names::GET_BALANCE, json!({})).unwrap();
    assert_eq!(result, json!({"btc": 0.5, "jpy": 10000.0}));
}

#[test]
fn unknown_tool_is_reported_by_name() {
    let exchange = RecordingExchange::new();
    let err = dispatch(&exchange, "nonexistent_tool", json!({})).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownTool);
    assert!(err.to_string().contains("nonexistent_tool"));
    assert!(exchange.calls().is_empty());
}

#[test]
fn legacy_tool_names_are_not_accepted() {
    let exchange = RecordingExchange::new();
    for legacy in ["get_orderbook", "get_accounts", "get_transactions", "get_order"] {
        let err = dispatch(&exchange, legacy, json!({})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownTool, "{legacy}");
    }
}

#[test]
fn exchange_errors_propagate_unchanged() {
    let exchange = RecordingExchange::failing("Nonce must be incremented");
    let err = dispatch(&exchange, names::GET_BALANCE, json!({})).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert!(err.to_string().contains("Nonce must be incremented"));
}
