//! MCP (Model Context Protocol) server implementation
//!
//! JSON-RPC over stdio exposing Coincheck as a set of tools.

pub mod dispatch;
pub mod handler;
pub mod protocol;
pub mod tools;

pub use dispatch::{Dispatcher, ToolArgs, DEFAULT_PAIR, SUPPORTED_TOOLS};
pub use handler::CoincheckHandler;
pub use protocol::{
    codes, methods, InitializeResult, McpError, McpHandler, McpRequest, McpResponse, McpServer,
    ToolCallResult, ToolContent, ToolDefinition,
};
pub use tools::{get_tool_definitions, names, TOOL_DEFINITIONS};
