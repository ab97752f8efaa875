use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::Side;

/// A public trade normalized across venues.
///
/// `side` is the taker (aggressor) side. Clients return trade lists sorted
/// ascending by `timestamp_ms` regardless of venue order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub price: Decimal,
    pub size: Decimal,
    pub side: Side,
    pub timestamp_ms: u64,
}

impl Trade {
    /// Quote-currency value of the trade.
    pub fn notional(&self) -> Decimal {
        self.price * self.size
    }
}

/// Gate.io public trade (`GET /api/v4/spot/trades`). Served newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateTrade {
    pub id: String,
    /// Trade time in seconds, as a string.
    pub create_time: String,
    /// Trade time in milliseconds, as a string with an optional
    /// fractional part (e.g. `"1548000000123.456"`).
    pub create_time_ms: Decimal,
    pub currency_pair: String,
    pub side: Side,
    pub amount: Decimal,
    pub price: Decimal,
}

impl From<GateTrade> for Trade {
    fn from(raw: GateTrade) -> Self {
        Trade {
            price: raw.price,
            size: raw.amount,
            side: raw.side,
            timestamp_ms: raw.create_time_ms.trunc().to_u64().unwrap_or_default(),
        }
    }
}

/// MEXC public trade (`GET /api/v3/trades`). Served oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MexcTrade {
    pub price: Decimal,
    pub qty: Decimal,
    /// Trade time in milliseconds.
    pub time: u64,
    /// `true` means the buyer was the maker, i.e. the taker sold.
    pub is_buyer_maker: bool,
}

impl From<MexcTrade> for Trade {
    fn from(raw: MexcTrade) -> Self {
        Trade {
            price: raw.price,
            size: raw.qty,
            side: if raw.is_buyer_maker {
                Side::Sell
            } else {
                Side::Buy
            },
            timestamp_ms: raw.time,
        }
    }
}
