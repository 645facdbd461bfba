//! Coincheck REST client
//!
//! Owns a single-threaded tokio runtime and blocks on each request, so callers
//! see a plain synchronous API. No retries and no caching.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Request, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio::runtime::Runtime;

use super::signer::{
    NonceGenerator, RequestSigner, HEADER_ACCESS_KEY, HEADER_ACCESS_NONCE,
    HEADER_ACCESS_SIGNATURE,
};
use super::types::*;
use super::Exchange;
use crate::config::{Credentials, DEFAULT_BASE_URL};
use crate::error::{CoincheckError, Result};

pub struct CoincheckClient {
    http: reqwest::Client,
    rt: Runtime,
    base_url: Url,
    signer: RequestSigner,
    nonces: NonceGenerator,
}

impl CoincheckClient {
    /// Create a client against the production endpoint
    pub fn new(credentials: &Credentials) -> Result<Self> {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    /// Create a client from `COINCHECK_API_KEY` / `COINCHECK_API_SECRET`
    pub fn from_env() -> Result<Self> {
        Self::new(&Credentials::from_env()?)
    }

    pub fn with_base_url(credentials: &Credentials, base_url: &str) -> Result<Self> {
        let signer = RequestSigner::new(credentials)?;

        let mut base_url = Url::parse(base_url).map_err(|e| {
            CoincheckError::ClientInit(format!("invalid base url {}: {}", base_url, e))
        })?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("coincheck-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CoincheckError::ClientInit(e.to_string()))?;

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| CoincheckError::ClientInit(e.to_string()))?;

        Ok(Self {
            http,
            rt,
            base_url,
            signer,
            nonces: NonceGenerator::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| CoincheckError::Config(format!("invalid endpoint {}: {}", path, e)))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn public<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        self.execute(self.build_public(path, query)?)
    }

    fn private<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T> {
        self.execute(self.build_private(method, path, body)?)
    }

    fn build_public(&self, path: &str, query: &[(&str, String)]) -> Result<Request> {
        let url = self.endpoint(path, query)?;
        tracing::debug!(%url, "GET (public)");
        Ok(self.http.get(url).build()?)
    }

    /// Signed request: `ACCESS-SIGNATURE` covers `nonce + url + body`
    fn build_private(&self, method: Method, path: &str, body: Option<Value>) -> Result<Request> {
        let url = self.endpoint(path, &[])?;
        let body = match body {
            Some(value) => serde_json::to_string(&value)?,
            None => String::new(),
        };

        let nonce = self.nonces.next().to_string();
        let signature = self.signer.sign(&nonce, url.as_str(), &body);
        tracing::debug!(%url, %method, "private request");

        let mut request = self
            .http
            .request(method, url)
            .header(HEADER_ACCESS_KEY, self.signer.api_key())
            .header(HEADER_ACCESS_NONCE, nonce.as_str())
            .header(HEADER_ACCESS_SIGNATURE, signature.as_str());
        if !body.is_empty() {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }
        Ok(request.build()?)
    }

    fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        self.rt.block_on(send(&self.http, request))
    }
}

async fn send<T: DeserializeOwned>(http: &reqwest::Client, request: Request) -> Result<T> {
    let response = http.execute(request).await?;
    let status = response.status();
    let body = response.text().await?;
    decode_response(status, &body)
}

/// Turn a raw response into `T`, surfacing exchange errors verbatim
pub(crate) fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) if status.is_success() => return Err(e.into()),
        Err(_) => {
            let text = body.trim();
            return Err(CoincheckError::Api {
                status: status.as_u16(),
                message: if text.is_empty() {
                    status.canonical_reason().unwrap_or("request failed").to_string()
                } else {
                    text.to_string()
                },
            });
        }
    };

    let rejected = value.get("success") == Some(&Value::Bool(false));
    if !status.is_success() || rejected {
        let message = match value.get("error") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => value.to_string(),
        };
        return Err(CoincheckError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_value(value)?)
}

fn pair_query(pair: &str) -> [(&'static str, String); 1] {
    [("pair", pair.to_string())]
}

fn order_rate_query(
    pair: &str,
    order_type: &str,
    price: f64,
    amount: f64,
) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("order_type", order_type.to_string()),
        ("pair", pair.to_string()),
    ];
    // the exchange wants exactly one of price/amount, but forwards both when given
    if price != 0.0 {
        query.push(("price", price.to_string()));
    }
    if amount != 0.0 {
        query.push(("amount", amount.to_string()));
    }
    query
}

fn order_body(pair: &str, order_type: &str, rate: f64, amount: f64) -> Value {
    json!({
        "pair": pair,
        "order_type": order_type,
        "rate": rate,
        "amount": amount,
    })
}

fn order_path(order_id: i64) -> String {
    format!("api/exchange/orders/{}", order_id)
}

impl Exchange for CoincheckClient {
    fn ticker(&self, pair: &str) -> Result<Ticker> {
        self.public("api/ticker", &pair_query(pair))
    }

    fn trades(&self, pair: &str) -> Result<TradeList> {
        self.public("api/trades", &pair_query(pair))
    }

    fn order_book(&self, pair: &str) -> Result<OrderBook> {
        self.public("api/order_books", &pair_query(pair))
    }

    fn exchange_status(&self, pair: &str) -> Result<ExchangeStatus> {
        self.public("api/exchange_status", &pair_query(pair))
    }

    fn order_rate(
        &self,
        pair: &str,
        order_type: &str,
        price: f64,
        amount: f64,
    ) -> Result<OrderRate> {
        let query = order_rate_query(pair, order_type, price, amount);
        self.public("api/exchange/orders/rate", &query)
    }

    fn balance(&self) -> Result<Balance> {
        self.private(Method::GET, "api/accounts/balance", None)
    }

    fn account_info(&self) -> Result<AccountInfo> {
        self.private(Method::GET, "api/accounts", None)
    }

    fn transactions(&self) -> Result<TransactionList> {
        self.private(Method::GET, "api/exchange/orders/transactions", None)
    }

    fn open_orders(&self) -> Result<OpenOrders> {
        self.private(Method::GET, "api/exchange/orders/opens", None)
    }

    fn create_order(
        &self,
        pair: &str,
        order_type: &str,
        rate: f64,
        amount: f64,
    ) -> Result<CreatedOrder> {
        let body = order_body(pair, order_type, rate, amount);
        self.private(Method::POST, "api/exchange/orders", Some(body))
    }

    fn cancel_order(&self, order_id: i64) -> Result<CanceledOrder> {
        self.private(Method::DELETE, &order_path(order_id), None)
    }

    fn order_details(&self, order_id: i64) -> Result<OrderDetail> {
        self.private(Method::GET, &order_path(order_id), None)
    }
}
