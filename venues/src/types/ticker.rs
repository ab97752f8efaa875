use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::de_opt_decimal;

/// Gate.io ticker (`GET /api/v4/spot/tickers`).
///
/// `last`, `lowest_ask` and `highest_bid` are empty strings on a market
/// with no trades or a one-sided book; those map to `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateTicker {
    pub currency_pair: String,
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub last: Option<Decimal>,
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub lowest_ask: Option<Decimal>,
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub highest_bid: Option<Decimal>,
    pub change_percentage: Decimal,
    pub base_volume: Decimal,
    pub quote_volume: Decimal,
    pub high_24h: Decimal,
    pub low_24h: Decimal,
}

/// MEXC last price (`GET /api/v3/ticker/price`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MexcPrice {
    pub symbol: String,
    pub price: Decimal,
}
