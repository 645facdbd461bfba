//! Error types for coincheck-mcp

use thiserror::Error;

/// Result type alias for coincheck-mcp operations
pub type Result<T> = std::result::Result<T, CoincheckError>;

/// Main error type for coincheck-mcp
#[derive(Error, Debug)]
pub enum CoincheckError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Failed to create coincheck client: {0}")]
    ClientInit(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Coincheck API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error category, stable across message wording changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Auth,
    ClientInit,
    Config,
    UnknownTool,
    Api,
    Http,
    Serialization,
    Io,
}

impl CoincheckError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoincheckError::Auth(_) => ErrorKind::Auth,
            CoincheckError::ClientInit(_) => ErrorKind::ClientInit,
            CoincheckError::Config(_) => ErrorKind::Config,
            CoincheckError::UnknownTool(_) => ErrorKind::UnknownTool,
            CoincheckError::Api { .. } => ErrorKind::Api,
            CoincheckError::Http(_) => ErrorKind::Http,
            CoincheckError::Serialization(_) => ErrorKind::Serialization,
            CoincheckError::Io(_) => ErrorKind::Io,
        }
    }

    /// Startup failures abort the process before the stdio loop begins
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CoincheckError::Auth(_) | CoincheckError::ClientInit(_) | CoincheckError::Config(_)
        )
    }

    /// Get error code for MCP protocol
    ///
    /// Everything a tool call can surface is reported as an internal error.
    pub fn code(&self) -> i64 {
        -32603
    }
}
