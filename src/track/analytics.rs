//! Per-venue market analytics series.
//!
//! Rolling time series (price, pressure, volume) capped at the last 100
//! points, plus a per-price volume profile rebuilt from the latest trade
//! window each cycle.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use venues::types::{OrderBook, Trade};

/// Points retained per series; older entries are dropped.
pub const MAX_POINTS: usize = 100;

/// Book levels per side counted toward pressure.
const PRESSURE_DEPTH: usize = 10;

/// Window for the rolling trade-volume sample.
const VOLUME_WINDOW_MS: u64 = 60_000;

/// Append to a capped series, dropping the oldest point when full.
pub fn push_capped<T>(series: &mut Vec<T>, value: T) {
    series.push(value);
    if series.len() > MAX_POINTS {
        series.remove(0);
    }
}

/// Buy and sell pressure from top-of-book volume.
///
/// Returns `(buy, sell)` as fractions of the two-sided total; both are
/// 0.5 on an empty book.
pub fn pressure(bid_volume: Decimal, ask_volume: Decimal) -> (Decimal, Decimal) {
    let total = bid_volume + ask_volume;
    if total.is_zero() {
        (dec!(0.5), dec!(0.5))
    } else {
        (bid_volume / total, ask_volume / total)
    }
}

/// Sum of trade sizes within the last minute before `now_ms`.
pub fn volume_last_minute(trades: &[Trade], now_ms: u64) -> Decimal {
    let cutoff = now_ms.saturating_sub(VOLUME_WINDOW_MS);
    trades
        .iter()
        .filter(|t| t.timestamp_ms > cutoff)
        .map(|t| t.size)
        .sum()
}

/// Trade sizes grouped by exact price.
pub fn volume_profile(trades: &[Trade]) -> BTreeMap<Decimal, Decimal> {
    let mut profile = BTreeMap::new();
    for trade in trades {
        *profile.entry(trade.price).or_insert(Decimal::ZERO) += trade.size;
    }
    profile
}

/// Rolling analytics state for one venue.
#[derive(Debug, Default)]
pub struct VenueAnalytics {
    pub timestamps: Vec<DateTime<Utc>>,
    /// Last trade price per cycle; `None` when the venue had no trades.
    pub prices: Vec<Option<Decimal>>,
    pub buy_pressure: Vec<Decimal>,
    pub sell_pressure: Vec<Decimal>,
    /// Rolling 1-minute trade volume per cycle.
    pub volumes: Vec<Decimal>,
    /// Running total of the per-cycle volume samples.
    pub accumulated_volume: Vec<Decimal>,
    /// Venue share of all-venue accumulated volume, in percent.
    pub market_share: Vec<Decimal>,
    /// Bid sizes of the latest book snapshot, best level first.
    pub bid_volumes: Vec<Decimal>,
    /// Trade sizes grouped by price, rebuilt from the latest trade window.
    pub volume_profile: BTreeMap<Decimal, Decimal>,
}

impl VenueAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one cycle's fetched data into the series.
    ///
    /// Returns `(price, volume_1m, buy_pressure, sell_pressure)` for the
    /// cycle summary log.
    pub fn record_cycle(
        &mut self,
        now: DateTime<Utc>,
        now_ms: u64,
        trades: &[Trade],
        book: &OrderBook,
    ) -> (Option<Decimal>, Decimal, Decimal, Decimal) {
        // Venues disagree on level ordering; sort before summing.
        let mut book = book.clone();
        book.normalize();

        let price = trades.last().map(|t| t.price);
        let bid_volume = book.bid_volume(PRESSURE_DEPTH);
        let ask_volume = book.ask_volume(PRESSURE_DEPTH);
        let (buy, sell) = pressure(bid_volume, ask_volume);
        let volume_1m = volume_last_minute(trades, now_ms);
        let accumulated = self.accumulated_volume.last().copied().unwrap_or_default() + volume_1m;

        push_capped(&mut self.timestamps, now);
        push_capped(&mut self.prices, price);
        push_capped(&mut self.buy_pressure, buy);
        push_capped(&mut self.sell_pressure, sell);
        push_capped(&mut self.volumes, volume_1m);
        push_capped(&mut self.accumulated_volume, accumulated);

        self.bid_volumes = book.bids.iter().map(|l| l[1]).collect();
        self.volume_profile = volume_profile(trades);

        (price, volume_1m, buy, sell)
    }

    /// Record this venue's share of the all-venue accumulated volume.
    pub fn record_share(&mut self, share: Decimal) {
        push_capped(&mut self.market_share, share);
    }

    pub fn last_accumulated(&self) -> Decimal {
        self.accumulated_volume.last().copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use venues::Side;

    fn trade(price: Decimal, size: Decimal, timestamp_ms: u64) -> Trade {
        Trade {
            price,
            size,
            side: Side::Buy,
            timestamp_ms,
        }
    }

    fn book() -> OrderBook {
        OrderBook {
            bids: vec![[dec!(0.30), dec!(3000)], [dec!(0.29), dec!(1000)]],
            asks: vec![[dec!(0.31), dec!(1000)]],
        }
    }

    #[test]
    fn test_push_capped_drops_oldest() {
        let mut series: Vec<u32> = (0..MAX_POINTS as u32).collect();
        push_capped(&mut series, 999);
        assert_eq!(series.len(), MAX_POINTS);
        assert_eq!(series[0], 1);
        assert_eq!(*series.last().unwrap(), 999);
    }

    #[test]
    fn test_pressure_ratio() {
        let (buy, sell) = pressure(dec!(3000), dec!(1000));
        assert_eq!(buy, dec!(0.75));
        assert_eq!(sell, dec!(0.25));
    }

    #[test]
    fn test_pressure_empty_book() {
        let (buy, sell) = pressure(Decimal::ZERO, Decimal::ZERO);
        assert_eq!(buy, dec!(0.5));
        assert_eq!(sell, dec!(0.5));
    }

    #[test]
    fn test_volume_last_minute_window() {
        let now_ms = 1_700_000_120_000;
        let trades = vec![
            trade(dec!(0.30), dec!(100), now_ms - 30_000), // in window
            trade(dec!(0.30), dec!(200), now_ms - 59_999), // in window
            trade(dec!(0.30), dec!(400), now_ms - 60_000), // on the boundary, out
            trade(dec!(0.30), dec!(800), now_ms - 120_000), // out
        ];
        assert_eq!(volume_last_minute(&trades, now_ms), dec!(300));
    }

    #[test]
    fn test_volume_profile_groups_by_price() {
        let trades = vec![
            trade(dec!(0.30), dec!(100), 1),
            trade(dec!(0.31), dec!(50), 2),
            trade(dec!(0.30), dec!(150), 3),
        ];
        let profile = volume_profile(&trades);
        assert_eq!(profile.len(), 2);
        assert_eq!(profile[&dec!(0.30)], dec!(250));
        assert_eq!(profile[&dec!(0.31)], dec!(50));
    }

    #[test]
    fn test_record_cycle_accumulates() {
        let mut analytics = VenueAnalytics::new();
        let now = Utc::now();
        let now_ms = 1_700_000_120_000;
        let trades = vec![trade(dec!(0.30), dec!(100), now_ms - 1000)];

        analytics.record_cycle(now, now_ms, &trades, &book());
        analytics.record_cycle(now, now_ms, &trades, &book());

        assert_eq!(analytics.volumes, vec![dec!(100), dec!(100)]);
        assert_eq!(analytics.accumulated_volume, vec![dec!(100), dec!(200)]);
        assert_eq!(analytics.prices, vec![Some(dec!(0.30)), Some(dec!(0.30))]);
        assert_eq!(analytics.bid_volumes, vec![dec!(3000), dec!(1000)]);
        assert_eq!(analytics.last_accumulated(), dec!(200));
    }

    #[test]
    fn test_record_cycle_no_trades() {
        let mut analytics = VenueAnalytics::new();
        let (price, volume, buy, sell) =
            analytics.record_cycle(Utc::now(), 1_700_000_000_000, &[], &book());
        assert_eq!(price, None);
        assert_eq!(volume, Decimal::ZERO);
        assert_eq!(buy, dec!(0.75));
        assert_eq!(sell, dec!(0.25));
        assert_eq!(analytics.prices, vec![None]);
    }

    #[test]
    fn test_record_cycle_normalizes_book_order() {
        // Bids served worst-first still produce best-first bid_volumes.
        let book = OrderBook {
            bids: vec![[dec!(0.28), dec!(10)], [dec!(0.30), dec!(20)]],
            asks: vec![],
        };
        let mut analytics = VenueAnalytics::new();
        analytics.record_cycle(Utc::now(), 0, &[], &book);
        assert_eq!(analytics.bid_volumes, vec![dec!(20), dec!(10)]);
    }
}
