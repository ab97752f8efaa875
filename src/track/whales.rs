//! Whale detection — large trades and large resting orders.

use rust_decimal::Decimal;
use tracing::{info, warn};
use venues::types::{OrderBook, Trade};
use venues::{Side, VenueId};

use crate::track::analytics::push_capped;

/// A single trade whose notional crossed the whale threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct WhaleAlert {
    pub venue: VenueId,
    pub side: Side,
    pub price: Decimal,
    pub amount: Decimal,
    pub notional: Decimal,
    pub timestamp_ms: u64,
}

/// A resting book order whose notional crossed the whale threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct LargeOrder {
    pub side: Side,
    pub price: Decimal,
    pub size: Decimal,
    pub notional: Decimal,
}

/// Whale-activity state for one venue.
#[derive(Debug)]
pub struct WhaleWatch {
    venue: VenueId,
    threshold: Decimal,
    /// Newest trade timestamp already scanned; older trades are not
    /// re-alerted on the next poll.
    last_trade_ms: u64,
    pub alerts: Vec<WhaleAlert>,
    /// Replaced wholesale every poll.
    pub large_bids: Vec<LargeOrder>,
    /// Replaced wholesale every poll.
    pub large_asks: Vec<LargeOrder>,
}

impl WhaleWatch {
    pub fn new(venue: VenueId, threshold: Decimal) -> Self {
        Self {
            venue,
            threshold,
            last_trade_ms: 0,
            alerts: Vec::new(),
            large_bids: Vec::new(),
            large_asks: Vec::new(),
        }
    }

    /// Scan a trade batch for whales, returning how many fired.
    ///
    /// Only trades newer than the previous scan's watermark are
    /// considered, so overlapping fetch windows do not re-alert.
    pub fn scan_trades(&mut self, trades: &[Trade]) -> usize {
        let mut fired = 0;
        for trade in trades {
            if trade.timestamp_ms <= self.last_trade_ms {
                continue;
            }
            let notional = trade.notional();
            if notional >= self.threshold {
                warn!(
                    venue = %self.venue,
                    side = %trade.side,
                    amount = %trade.size,
                    price = %trade.price,
                    notional = %notional,
                    "WHALE ALERT"
                );
                push_capped(
                    &mut self.alerts,
                    WhaleAlert {
                        venue: self.venue,
                        side: trade.side,
                        price: trade.price,
                        amount: trade.size,
                        notional,
                        timestamp_ms: trade.timestamp_ms,
                    },
                );
                fired += 1;
            }
        }
        if let Some(newest) = trades.iter().map(|t| t.timestamp_ms).max() {
            self.last_trade_ms = self.last_trade_ms.max(newest);
        }
        fired
    }

    /// Collect large resting orders, replacing the previous collection.
    pub fn scan_book(&mut self, book: &OrderBook) {
        self.large_bids = collect_large(&book.bids, Side::Buy, self.threshold);
        self.large_asks = collect_large(&book.asks, Side::Sell, self.threshold);
        for order in self.large_bids.iter().chain(self.large_asks.iter()) {
            info!(
                venue = %self.venue,
                side = %order.side,
                size = %order.size,
                price = %order.price,
                notional = %order.notional,
                "large resting order"
            );
        }
    }
}

fn collect_large(levels: &[[Decimal; 2]], side: Side, threshold: Decimal) -> Vec<LargeOrder> {
    levels
        .iter()
        .filter_map(|l| {
            let notional = l[0] * l[1];
            (notional >= threshold).then(|| LargeOrder {
                side,
                price: l[0],
                size: l[1],
                notional,
            })
        })
        .collect()
}
