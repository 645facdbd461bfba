//! HMAC-SHA256 request signing for private endpoints

use std::fmt;

use hmac::{Hmac, Mac};
use parking_lot::Mutex;
use sha2::Sha256;

use crate::config::Credentials;
use crate::error::{CoincheckError, Result};

type HmacSha256 = Hmac<Sha256>;

pub const HEADER_ACCESS_KEY: &str = "ACCESS-KEY";
pub const HEADER_ACCESS_NONCE: &str = "ACCESS-NONCE";
pub const HEADER_ACCESS_SIGNATURE: &str = "ACCESS-SIGNATURE";

/// Signs `nonce + url + body` with the API secret
#[derive(Clone)]
pub struct RequestSigner {
    api_key: String,
    mac: HmacSha256,
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

impl RequestSigner {
    pub fn new(credentials: &Credentials) -> Result<Self> {
        credentials.validate()?;
        let mac = HmacSha256::new_from_slice(credentials.api_secret.as_bytes())
            .map_err(|e| CoincheckError::ClientInit(format!("invalid api secret: {}", e)))?;
        Ok(Self {
            api_key: credentials.api_key.clone(),
            mac,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Lowercase hex signature
    pub fn sign(&self, nonce: &str, url: &str, body: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(nonce.as_bytes());
        mac.update(url.as_bytes());
        mac.update(body.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

/// Strictly increasing millisecond nonces
#[derive(Debug, Default)]
pub struct NonceGenerator {
    last: Mutex<i64>,
}

impl NonceGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let mut last = self.last.lock();
        let nonce = if now > *last { now } else { *last + 1 };
        *last = nonce;
        nonce
    }
}
