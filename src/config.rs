//! Credential and endpoint configuration
//!
//! Credentials come either from a JSON file (`{"api_key": ..., "api_secret": ...}`)
//! or from the `COINCHECK_API_KEY` / `COINCHECK_API_SECRET` environment variables.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoincheckError, Result};

pub const ENV_API_KEY: &str = "COINCHECK_API_KEY";
pub const ENV_API_SECRET: &str = "COINCHECK_API_SECRET";
pub const DEFAULT_BASE_URL: &str = "https://coincheck.com";

/// API credentials for private endpoints
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Both values must be present and non-blank
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() || self.api_secret.trim().is_empty() {
            return Err(CoincheckError::Auth(
                "api_key and api_secret are required".to_string(),
            ));
        }
        Ok(())
    }

    /// Load credentials from a JSON config file. `~` is expanded.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = path.as_ref().to_string_lossy();
        let expanded = shellexpand::tilde(&raw).to_string();

        let data = std::fs::read_to_string(&expanded).map_err(|e| {
            CoincheckError::Config(format!("failed to read config file {}: {}", expanded, e))
        })?;
        let creds: Credentials = serde_json::from_str(&data).map_err(|e| {
            CoincheckError::Config(format!("failed to parse config file {}: {}", expanded, e))
        })?;

        creds.validate().map_err(|_| {
            CoincheckError::Auth("api_key and api_secret are required in config file".to_string())
        })?;
        Ok(creds)
    }

    /// Load credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let creds = Self {
            api_key: lookup(ENV_API_KEY).unwrap_or_default(),
            api_secret: lookup(ENV_API_SECRET).unwrap_or_default(),
        };
        creds.validate().map_err(|_| {
            CoincheckError::Auth(format!(
                "{} and {} environment variables are required",
                ENV_API_KEY, ENV_API_SECRET
            ))
        })?;
        Ok(creds)
    }

    /// Config file when a path is given, environment otherwise
    pub fn resolve(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => Self::from_file(path),
            None => Self::from_env(),
        }
    }
}
