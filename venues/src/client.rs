//! Venue-agnostic dispatch for market-data calls.

use rust_decimal::Decimal;

use crate::error::Result;
use crate::gate::GateClient;
use crate::mexc::MexcClient;
use crate::types::{OrderBook, Pair, Trade, VenueId};

/// A market-data client for one venue.
///
/// Order placement stays on [`GateClient`] directly; only the read paths
/// the tracker needs are dispatched here.
#[derive(Debug, Clone)]
pub enum VenueClient {
    Gate(GateClient),
    Mexc(MexcClient),
}

impl VenueClient {
    pub fn venue(&self) -> VenueId {
        match self {
            VenueClient::Gate(_) => VenueId::Gate,
            VenueClient::Mexc(_) => VenueId::Mexc,
        }
    }

    /// Last traded price; `None` for a pair with no trades.
    pub async fn last_price(&self, pair: &Pair) -> Result<Option<Decimal>> {
        match self {
            VenueClient::Gate(c) => c.last_price(pair).await,
            VenueClient::Mexc(c) => c.last_price(pair).await,
        }
    }

    /// Order book snapshot, best levels first on both sides.
    pub async fn order_book(&self, pair: &Pair, limit: u32) -> Result<OrderBook> {
        match self {
            VenueClient::Gate(c) => c.order_book(pair, limit).await,
            VenueClient::Mexc(c) => c.depth(pair, limit).await,
        }
    }

    /// Recent public trades, oldest first.
    pub async fn recent_trades(&self, pair: &Pair, limit: u32) -> Result<Vec<Trade>> {
        match self {
            VenueClient::Gate(c) => c.trades(pair, limit).await,
            VenueClient::Mexc(c) => c.trades(pair, limit).await,
        }
    }
}
