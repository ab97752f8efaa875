use rust_decimal::Decimal;

use crate::config::MexcConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::types::{MexcDepth, MexcPrice, MexcTrade, OrderBook, Pair, Trade};

/// MEXC spot REST client. Public market data only.
#[derive(Debug, Clone)]
pub struct MexcClient {
    http: HttpClient,
}

impl MexcClient {
    pub fn new(config: &MexcConfig) -> Self {
        Self {
            http: HttpClient::new(&config.base_url),
        }
    }

    /// GET /api/v3/ticker/price - Last traded price for a symbol.
    pub async fn price(&self, pair: &Pair) -> Result<MexcPrice> {
        let symbol = pair.mexc_id();
        self.http
            .get("/api/v3/ticker/price", &[("symbol", symbol.as_str())])
            .await
    }

    /// Last traded price, shaped like the Gate client's.
    pub async fn last_price(&self, pair: &Pair) -> Result<Option<Decimal>> {
        Ok(Some(self.price(pair).await?.price))
    }

    /// GET /api/v3/depth - Order book snapshot, best levels first.
    pub async fn depth(&self, pair: &Pair, limit: u32) -> Result<OrderBook> {
        let symbol = pair.mexc_id();
        let limit_str = limit.to_string();
        let raw: MexcDepth = self
            .http
            .get(
                "/api/v3/depth",
                &[("symbol", symbol.as_str()), ("limit", limit_str.as_str())],
            )
            .await?;
        Ok(raw.into())
    }

    /// GET /api/v3/trades - Recent public trades, oldest first.
    pub async fn trades(&self, pair: &Pair, limit: u32) -> Result<Vec<Trade>> {
        let symbol = pair.mexc_id();
        let limit_str = limit.to_string();
        let raw: Vec<MexcTrade> = self
            .http
            .get(
                "/api/v3/trades",
                &[("symbol", symbol.as_str()), ("limit", limit_str.as_str())],
            )
            .await?;
        Ok(raw.into_iter().map(Trade::from).collect())
    }
}
