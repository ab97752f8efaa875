//! Multi-venue tracker orchestrator.
//!
//! Polls Gate.io and MEXC on a fixed interval, folds each venue's trades
//! and book into the analytics series, and rewrites the chart snapshot
//! files every cycle. One venue failing never stalls the other.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use venues::utils::epoch_ms;
use venues::{Pair, VenueClient};

use crate::error::Result;
use crate::track::analytics::VenueAnalytics;
use crate::track::snapshot::{
    self, MarketData, VenueMarketData, VenueVolumeData, VolumeData,
};
use crate::track::whales::WhaleWatch;

/// Trades fetched per cycle.
const TRADE_LIMIT: u32 = 100;

/// Book levels fetched per cycle.
const BOOK_LIMIT: u32 = 100;

/// Tracker parameters.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Trading pair tracked on both venues.
    pub pair: Pair,
    /// Seconds between polling cycles.
    pub interval_secs: u64,
    /// Notional (quote currency) that counts as whale activity.
    pub whale_threshold: Decimal,
    /// Directory for the JSON snapshot files.
    pub out_dir: PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            pair: Pair::new("GMRT", "USDT"),
            interval_secs: 30,
            whale_threshold: dec!(10000),
            out_dir: PathBuf::from("docs"),
        }
    }
}

/// Per-venue tracker state.
struct VenueState {
    client: VenueClient,
    analytics: VenueAnalytics,
    whales: WhaleWatch,
}

impl VenueState {
    fn new(client: VenueClient, whale_threshold: Decimal) -> Self {
        let venue = client.venue();
        Self {
            client,
            analytics: VenueAnalytics::new(),
            whales: WhaleWatch::new(venue, whale_threshold),
        }
    }
}

/// Top-level market tracker.
pub struct Tracker {
    config: TrackerConfig,
    gate: VenueState,
    mexc: VenueState,
}

impl Tracker {
    pub fn new(config: TrackerConfig, gate: VenueClient, mexc: VenueClient) -> Self {
        let threshold = config.whale_threshold;
        Self {
            config,
            gate: VenueState::new(gate, threshold),
            mexc: VenueState::new(mexc, threshold),
        }
    }

    /// Run the tracker until `cancel` is triggered.
    pub async fn run(&mut self, cancel: CancellationToken) -> Result<()> {
        info!(
            pair = %self.config.pair,
            interval_secs = self.config.interval_secs,
            whale_threshold = %self.config.whale_threshold,
            out_dir = %self.config.out_dir.display(),
            "CONFIG"
        );

        let mut interval = time::interval(Duration::from_secs(self.config.interval_secs));

        loop {
            tokio::select! {
                _ = interval.tick() => self.cycle().await,
                _ = cancel.cancelled() => {
                    info!("shutting down");
                    break;
                }
            }
        }

        Ok(())
    }

    /// One polling cycle across both venues.
    async fn cycle(&mut self) {
        let pair = self.config.pair.clone();
        poll_venue(&mut self.gate, &pair).await;
        poll_venue(&mut self.mexc, &pair).await;

        // Market share over the all-venue accumulated total.
        let gate_acc = self.gate.analytics.last_accumulated();
        let mexc_acc = self.mexc.analytics.last_accumulated();
        let total = gate_acc + mexc_acc;
        if total > Decimal::ZERO {
            self.gate
                .analytics
                .record_share(gate_acc / total * dec!(100));
            self.mexc
                .analytics
                .record_share(mexc_acc / total * dec!(100));
        }

        self.write_snapshots();
    }

    fn write_snapshots(&self) {
        let now = Utc::now();
        let market = MarketData {
            gateio: VenueMarketData::from_analytics(&self.gate.analytics, now),
            mexc: VenueMarketData::from_analytics(&self.mexc.analytics, now),
        };
        let volume = VolumeData {
            gateio: VenueVolumeData::from_analytics(&self.gate.analytics, now),
            mexc: VenueVolumeData::from_analytics(&self.mexc.analytics, now),
        };
        match snapshot::write_snapshots(&self.config.out_dir, &market, &volume) {
            Ok(()) => info!(dir = %self.config.out_dir.display(), "SNAPSHOT"),
            Err(e) => warn!(error = %e, "snapshot write failed"),
        }
    }
}

/// Fetch and record one venue. Errors log and skip the venue this cycle.
async fn poll_venue(state: &mut VenueState, pair: &Pair) {
    let venue = state.client.venue();

    let trades = match state.client.recent_trades(pair, TRADE_LIMIT).await {
        Ok(t) => t,
        Err(e) => {
            error!(venue = %venue, error = %e, "trade fetch failed");
            return;
        }
    };
    let book = match state.client.order_book(pair, BOOK_LIMIT).await {
        Ok(b) => b,
        Err(e) => {
            error!(venue = %venue, error = %e, "order book fetch failed");
            return;
        }
    };

    state.whales.scan_trades(&trades);
    state.whales.scan_book(&book);

    let (price, volume_1m, buy, sell) =
        state
            .analytics
            .record_cycle(Utc::now(), epoch_ms(), &trades, &book);

    info!(
        venue = %venue,
        price = price.map(|p| p.to_string()).unwrap_or_else(|| "-".into()),
        volume_1m = %volume_1m,
        accumulated = %state.analytics.last_accumulated(),
        buy_pressure = %buy.round_dp(4),
        sell_pressure = %sell.round_dp(4),
        large_bids = state.whales.large_bids.len(),
        large_asks = state.whales.large_asks.len(),
        "CYCLE"
    );
}
