//! Coincheck MCP Server
//!
//! Run with: coincheck-mcp-server [--config path/to/config.json]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use coincheck_mcp::config::{Credentials, DEFAULT_BASE_URL};
use coincheck_mcp::error::Result;
use coincheck_mcp::exchange::CoincheckClient;
use coincheck_mcp::mcp::{CoincheckHandler, McpServer};

#[derive(Parser, Debug)]
#[command(name = "coincheck-mcp-server")]
#[command(about = "MCP server exposing the Coincheck exchange API")]
#[command(version)]
struct Args {
    /// JSON config file with api_key and api_secret.
    /// Falls back to COINCHECK_API_KEY / COINCHECK_API_SECRET when omitted.
    #[arg(long, env = "COINCHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Coincheck REST base URL
    #[arg(long, env = "COINCHECK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

fn run(args: Args) -> Result<()> {
    let credentials = Credentials::resolve(args.config.as_deref())?;
    let client = CoincheckClient::with_base_url(&credentials, &args.base_url)?;

    let server = McpServer::new(CoincheckHandler::new(client));

    tracing::info!("Coincheck MCP server starting ({})", args.base_url);
    server.run()?;
    tracing::info!("stdin closed, shutting down");

    Ok(())
}

fn main() -> ExitCode {
    // Initialize logging to stderr (stdout is for MCP protocol)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_fatal() {
                tracing::error!("Failed to start server: {}", e);
            } else {
                tracing::error!("Server error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}
