use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::Side;
use super::pair::Pair;
use crate::utils::de_opt_decimal;

/// Gate.io spot order, as returned by the order endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateOrder {
    pub id: String,
    /// Creation time in seconds, as a string.
    pub create_time: String,
    pub currency_pair: String,
    /// `open`, `closed` or `cancelled`.
    pub status: String,
    pub side: Side,
    pub amount: Decimal,
    pub price: Decimal,
    /// Amount still unfilled.
    pub left: Decimal,
    /// Owning account UID, when the venue includes it.
    #[serde(default)]
    pub user: Option<u64>,
}

/// Body for `POST /api/v4/spot/orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub currency_pair: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub account: String,
    pub side: Side,
    pub amount: Decimal,
    pub price: Decimal,
    pub time_in_force: String,
}

impl OrderRequest {
    /// A good-til-cancelled spot limit order.
    pub fn limit(pair: &Pair, side: Side, price: Decimal, amount: Decimal) -> Self {
        Self {
            currency_pair: pair.gate_id(),
            order_type: "limit".into(),
            account: "spot".into(),
            side,
            amount,
            price,
            time_in_force: "gtc".into(),
        }
    }
}

/// Gate.io spot account balance (`GET /api/v4/spot/accounts`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateBalance {
    pub currency: String,
    pub available: Decimal,
    pub locked: Decimal,
}

/// Gate.io currency pair metadata (`GET /api/v4/spot/currency_pairs`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyPairInfo {
    pub id: String,
    pub base: String,
    pub quote: String,
    pub fee: Decimal,
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub min_base_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub min_quote_amount: Option<Decimal>,
    #[serde(default)]
    pub amount_precision: Option<u32>,
    /// Price precision.
    #[serde(default)]
    pub precision: Option<u32>,
    pub trade_status: String,
}
