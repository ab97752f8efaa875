//! Sell bot configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use venues::Pair;

/// All tuneable parameters for the sell bot.
///
/// Use [`Default::default()`] for the GMRT/USDT launch defaults, then
/// override individual thresholds as needed.
#[derive(Debug, Clone)]
pub struct SellConfig {
    /// Trading pair.
    pub pair: Pair,
    /// Minimum sell price; no sell is ever priced below this.
    pub min_sell_price: Decimal,
    /// Price floor; no buys are placed below this.
    pub floor_price: Decimal,
    /// Launch price; no buys are placed at or below this.
    pub launch_price: Decimal,
    /// Baseline trade size in tokens.
    pub base_amount: Decimal,
    /// Depth band half-width around the current price, as a fraction.
    pub depth_pct: Decimal,
    /// Starting inventory in tokens.
    pub total_tokens: Decimal,
    /// Market maker UID whose open buy orders anchor the buy price.
    pub mm_uid: Option<u64>,
    /// Seconds between polling cycles.
    pub interval_secs: u64,
    /// Decide and log but never place or cancel orders.
    pub dry_run: bool,
}

impl Default for SellConfig {
    fn default() -> Self {
        Self {
            pair: Pair::new("GMRT", "USDT"),
            min_sell_price: dec!(0.30),
            floor_price: dec!(0.24),
            launch_price: dec!(0.12),
            base_amount: dec!(250000),
            depth_pct: dec!(0.02),
            total_tokens: dec!(5000000),
            mm_uid: None,
            interval_secs: 5,
            dry_run: false,
        }
    }
}
