//! Request routing for the Coincheck MCP server

use serde_json::json;

use super::dispatch::{Dispatcher, ToolArgs};
use super::protocol::{
    codes, methods, InitializeResult, McpHandler, McpRequest, McpResponse, ToolCallResult,
};
use super::tools::get_tool_definitions;
use crate::exchange::Exchange;

/// MCP request handler backed by an [`Exchange`]
pub struct CoincheckHandler<E: Exchange> {
    exchange: E,
}

impl<E: Exchange> CoincheckHandler<E> {
    pub fn new(exchange: E) -> Self {
        Self { exchange }
    }

    pub fn exchange(&self) -> &E {
        &self.exchange
    }

    fn handle_tool_call(&self, request: McpRequest) -> McpResponse {
        let Some(name) = request.params.get("name").and_then(|v| v.as_str()) else {
            return McpResponse::error(request.id, codes::INVALID_PARAMS, "Missing tool name");
        };
        let args = ToolArgs::from_params(&request.params);

        tracing::debug!(tool = name, args = args.len(), "Calling tool");
        let result = match Dispatcher::new(&self.exchange).dispatch(name, &args) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(tool = name, "Tool call failed: {}", e);
                return McpResponse::from_error(request.id, &e);
            }
        };

        match ToolCallResult::json(name, &result) {
            Ok(tool_result) => McpResponse::success(request.id, json!(tool_result)),
            Err(e) => McpResponse::error(
                request.id,
                codes::INTERNAL_ERROR,
                format!("Failed to marshal result: {}", e),
            ),
        }
    }
}

impl<E: Exchange> McpHandler for CoincheckHandler<E> {
    fn handle_request(&self, request: McpRequest) -> Option<McpResponse> {
        let response = match request.method.as_str() {
            methods::INITIALIZED => return None,
            methods::INITIALIZE => {
                let result = InitializeResult::default();
                McpResponse::success(request.id, json!(result))
            }
            methods::LIST_TOOLS => {
                let tools = get_tool_definitions();
                McpResponse::success(request.id, json!({"tools": tools}))
            }
            methods::CALL_TOOL => self.handle_tool_call(request),
            _ => McpResponse::error(request.id, codes::METHOD_NOT_FOUND, "Method not found"),
        };
        Some(response)
    }
}
