use reqwest::Method;
use rust_decimal::Decimal;
use tracing::info;

use crate::config::GateConfig;
use crate::error::{Result, VenueError};
use crate::http::{encode_query, HttpClient};
use crate::signing::GateSigner;
use crate::types::{
    CurrencyPairInfo, GateBalance, GateBook, GateOrder, GateTicker, GateTrade, OrderBook,
    OrderRequest, Pair, Trade,
};
use crate::utils::epoch_secs;

/// Gate.io spot REST client.
///
/// Market-data endpoints work without credentials; the order and account
/// endpoints require an API key/secret pair in the [`GateConfig`].
#[derive(Debug, Clone)]
pub struct GateClient {
    http: HttpClient,
    signer: Option<GateSigner>,
}

impl GateClient {
    pub fn new(config: &GateConfig) -> Self {
        let signer = match (&config.api_key, &config.api_secret) {
            (Some(key), Some(secret)) => {
                // Log truncated key for identification.
                let shown = key.get(..6).unwrap_or(key.as_str());
                info!(key = format!("{shown}.."), "gate credentials loaded");
                Some(GateSigner::new(key, secret))
            }
            _ => None,
        };
        Self {
            http: HttpClient::new(&config.base_url),
            signer,
        }
    }

    fn signer(&self) -> Result<&GateSigner> {
        self.signer.as_ref().ok_or(VenueError::MissingCredentials)
    }

    // --- Market data ---

    /// GET /api/v4/spot/tickers - Ticker for one currency pair.
    pub async fn ticker(&self, pair: &Pair) -> Result<GateTicker> {
        let id = pair.gate_id();
        let tickers: Vec<GateTicker> = self
            .http
            .get("/api/v4/spot/tickers", &[("currency_pair", id.as_str())])
            .await?;
        tickers
            .into_iter()
            .next()
            .ok_or_else(|| VenueError::PairNotFound(pair.to_string()))
    }

    /// Last traded price from the ticker; `None` for a pair with no trades.
    pub async fn last_price(&self, pair: &Pair) -> Result<Option<Decimal>> {
        Ok(self.ticker(pair).await?.last)
    }

    /// GET /api/v4/spot/order_book - Order book snapshot, best levels first.
    pub async fn order_book(&self, pair: &Pair, limit: u32) -> Result<OrderBook> {
        let id = pair.gate_id();
        let limit_str = limit.to_string();
        let raw: GateBook = self
            .http
            .get(
                "/api/v4/spot/order_book",
                &[
                    ("currency_pair", id.as_str()),
                    ("limit", limit_str.as_str()),
                ],
            )
            .await?;
        Ok(raw.into())
    }

    /// GET /api/v4/spot/trades - Recent public trades, oldest first.
    pub async fn trades(&self, pair: &Pair, limit: u32) -> Result<Vec<Trade>> {
        let id = pair.gate_id();
        let limit_str = limit.to_string();
        let raw: Vec<GateTrade> = self
            .http
            .get(
                "/api/v4/spot/trades",
                &[
                    ("currency_pair", id.as_str()),
                    ("limit", limit_str.as_str()),
                ],
            )
            .await?;
        // The venue serves newest first.
        let mut trades: Vec<Trade> = raw.into_iter().map(Trade::from).collect();
        trades.reverse();
        Ok(trades)
    }

    /// GET /api/v4/spot/currency_pairs - All supported currency pairs.
    pub async fn currency_pairs(&self) -> Result<Vec<CurrencyPairInfo>> {
        self.http.get("/api/v4/spot/currency_pairs", &[]).await
    }

    // --- Orders + account (signed) ---

    /// GET /api/v4/spot/orders - Open orders for the pair.
    pub async fn open_orders(&self, pair: &Pair) -> Result<Vec<GateOrder>> {
        let signer = self.signer()?;
        let id = pair.gate_id();
        let query = encode_query(&[("currency_pair", id.as_str()), ("status", "open")]);
        let path = "/api/v4/spot/orders";
        let headers = signer.headers("GET", path, &query, "", epoch_secs());
        self.http
            .send_signed(Method::GET, path, &query, None, &headers)
            .await
    }

    /// POST /api/v4/spot/orders - Place a spot limit order.
    pub async fn place_order(&self, request: &OrderRequest) -> Result<GateOrder> {
        let signer = self.signer()?;
        let body = serde_json::to_string(request)?;
        let path = "/api/v4/spot/orders";
        let headers = signer.headers("POST", path, "", &body, epoch_secs());
        self.http
            .send_signed(Method::POST, path, "", Some(body), &headers)
            .await
    }

    /// DELETE /api/v4/spot/orders/{order_id} - Cancel a single order.
    pub async fn cancel_order(&self, pair: &Pair, order_id: &str) -> Result<GateOrder> {
        let signer = self.signer()?;
        let id = pair.gate_id();
        let query = encode_query(&[("currency_pair", id.as_str())]);
        let path = format!("/api/v4/spot/orders/{order_id}");
        let headers = signer.headers("DELETE", &path, &query, "", epoch_secs());
        self.http
            .send_signed(Method::DELETE, &path, &query, None, &headers)
            .await
    }

    /// GET /api/v4/spot/accounts - Spot account balances.
    pub async fn balances(&self) -> Result<Vec<GateBalance>> {
        let signer = self.signer()?;
        let path = "/api/v4/spot/accounts";
        let headers = signer.headers("GET", path, "", "", epoch_secs());
        self.http
            .send_signed(Method::GET, path, "", None, &headers)
            .await
    }
}
