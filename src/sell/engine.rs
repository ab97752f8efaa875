//! Threshold decision engine.
//!
//! Pure arithmetic over the configured price bands: given the current
//! price, the remaining inventory and the best bid levels, decide which
//! limit orders to place this cycle. No I/O happens here, so the whole
//! decision is unit-testable.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use venues::types::BookLevel;
use venues::{GateOrder, Side};

use crate::sell::config::SellConfig;

/// Bid levels considered when sizing a trade.
const LIQUIDITY_LEVELS: usize = 5;

/// One order the engine wants on the book.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderIntent {
    pub side: Side,
    pub price: Decimal,
    pub amount: Decimal,
}

/// Outcome of one decision cycle.
///
/// When both legs fire, the sell leg is decided first and the buy leg is
/// sized against the inventory left after the sell.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// Lower depth-band bound; sells and buys are floored here.
    pub min_depth: Decimal,
    /// Upper depth-band bound (informational).
    pub max_depth: Decimal,
    pub sell: Option<OrderIntent>,
    pub buy: Option<OrderIntent>,
}

/// Price band at `depth_pct` around the current price.
pub fn depth_band(price: Decimal, depth_pct: Decimal) -> (Decimal, Decimal) {
    let min_depth = price * (Decimal::ONE - depth_pct);
    let max_depth = price * (Decimal::ONE + depth_pct);
    (min_depth, max_depth)
}

/// Trade size from remaining inventory and top-of-book liquidity.
///
/// Takes at most half the liquidity resting on the best five bid levels,
/// never less than `base` and never more than `remaining`.
pub fn dynamic_amount(remaining: Decimal, base: Decimal, bids: &[BookLevel]) -> Decimal {
    let liquidity: Decimal = bids.iter().take(LIQUIDITY_LEVELS).map(|l| l[1]).sum();
    remaining.min(base.max(liquidity * dec!(0.5)))
}

/// Lowest price among the tracked market maker's open buy orders.
pub fn mm_min_buy(orders: &[GateOrder]) -> Option<Decimal> {
    orders
        .iter()
        .filter(|o| o.side == Side::Buy)
        .map(|o| o.price)
        .min()
}

/// Decide this cycle's orders.
///
/// `mm_buy_floor` is the lowest tracked market-maker buy price; when
/// absent the buy leg falls back to the depth-band lower bound.
pub fn decide(
    config: &SellConfig,
    price: Decimal,
    remaining: Decimal,
    mm_buy_floor: Option<Decimal>,
    bids: &[BookLevel],
) -> Decision {
    let (min_depth, max_depth) = depth_band(price, config.depth_pct);

    let mut after_sell = remaining;
    let sell = if price >= config.min_sell_price {
        let amount = dynamic_amount(remaining, config.base_amount, bids);
        if amount > Decimal::ZERO {
            after_sell = remaining - amount;
            Some(OrderIntent {
                side: Side::Sell,
                price: min_depth.max(config.min_sell_price),
                amount,
            })
        } else {
            None
        }
    } else {
        None
    };

    let buy = if price > config.launch_price && price >= config.floor_price {
        let amount = dynamic_amount(after_sell, config.base_amount, bids);
        if amount > Decimal::ZERO {
            Some(OrderIntent {
                side: Side::Buy,
                price: min_depth.max(mm_buy_floor.unwrap_or(min_depth)),
                amount,
            })
        } else {
            None
        }
    } else {
        None
    };

    Decision {
        min_depth,
        max_depth,
        sell,
        buy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SellConfig {
        SellConfig::default()
    }

    fn bids(sizes: &[Decimal]) -> Vec<BookLevel> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, s)| [dec!(0.30) - Decimal::new(i as i64, 3), *s])
            .collect()
    }

    #[test]
    fn test_depth_band() {
        let (min, max) = depth_band(dec!(0.35), dec!(0.02));
        assert_eq!(min, dec!(0.3430));
        assert_eq!(max, dec!(0.3570));
    }

    #[test]
    fn test_dynamic_amount_base_floor() {
        // Thin book: half the liquidity is below base, so base wins.
        let book = bids(&[dec!(1000), dec!(2000)]);
        let amount = dynamic_amount(dec!(5000000), dec!(250000), &book);
        assert_eq!(amount, dec!(250000));
    }

    #[test]
    fn test_dynamic_amount_takes_half_liquidity() {
        let book = bids(&[dec!(200000); 5]); // 1M resting
        let amount = dynamic_amount(dec!(5000000), dec!(250000), &book);
        assert_eq!(amount, dec!(500000));
    }

    #[test]
    fn test_dynamic_amount_ignores_levels_past_five() {
        let book = bids(&[dec!(200000); 8]);
        let amount = dynamic_amount(dec!(5000000), dec!(250000), &book);
        assert_eq!(amount, dec!(500000)); // only the best five count
    }

    #[test]
    fn test_dynamic_amount_clamped_by_remaining() {
        let book = bids(&[dec!(200000); 5]);
        let amount = dynamic_amount(dec!(100000), dec!(250000), &book);
        assert_eq!(amount, dec!(100000));
    }

    #[test]
    fn test_dynamic_amount_empty_book() {
        let amount = dynamic_amount(dec!(5000000), dec!(250000), &[]);
        assert_eq!(amount, dec!(250000));
    }

    #[test]
    fn test_sell_fires_at_threshold() {
        let d = decide(&config(), dec!(0.30), dec!(5000000), None, &[]);
        let sell = d.sell.expect("sell should fire");
        assert_eq!(sell.side, Side::Sell);
        // min_depth = 0.294 < 0.30, so the floor wins
        assert_eq!(sell.price, dec!(0.30));
        assert_eq!(sell.amount, dec!(250000));
    }

    #[test]
    fn test_sell_price_tracks_depth_above_threshold() {
        let d = decide(&config(), dec!(0.40), dec!(5000000), None, &[]);
        let sell = d.sell.unwrap();
        // min_depth = 0.40 * 0.98 = 0.392 > 0.30
        assert_eq!(sell.price, dec!(0.3920));
    }

    #[test]
    fn test_no_sell_below_threshold() {
        let d = decide(&config(), dec!(0.29), dec!(5000000), None, &[]);
        assert!(d.sell.is_none());
    }

    #[test]
    fn test_no_sell_when_inventory_empty() {
        let d = decide(&config(), dec!(0.35), Decimal::ZERO, None, &[]);
        assert!(d.sell.is_none());
    }

    #[test]
    fn test_sell_remainder_when_below_base() {
        let d = decide(&config(), dec!(0.35), dec!(120000), None, &[]);
        assert_eq!(d.sell.unwrap().amount, dec!(120000));
    }

    #[test]
    fn test_buy_fires_above_floor() {
        let d = decide(&config(), dec!(0.25), dec!(5000000), None, &[]);
        assert!(d.sell.is_none()); // below min sell
        let buy = d.buy.expect("buy should fire");
        assert_eq!(buy.side, Side::Buy);
        assert_eq!(buy.price, d.min_depth);
    }

    #[test]
    fn test_no_buy_below_floor() {
        let d = decide(&config(), dec!(0.20), dec!(5000000), None, &[]);
        assert!(d.buy.is_none());
    }

    #[test]
    fn test_no_buy_at_launch_price() {
        let mut cfg = config();
        cfg.floor_price = dec!(0.10);
        let d = decide(&cfg, dec!(0.12), dec!(5000000), None, &[]);
        assert!(d.buy.is_none());
    }

    #[test]
    fn test_buy_anchored_to_mm_floor() {
        let d = decide(&config(), dec!(0.25), dec!(5000000), Some(dec!(0.26)), &[]);
        // mm floor 0.26 > min_depth 0.245
        assert_eq!(d.buy.unwrap().price, dec!(0.26));
    }

    #[test]
    fn test_mm_floor_below_depth_is_ignored() {
        let d = decide(&config(), dec!(0.25), dec!(5000000), Some(dec!(0.20)), &[]);
        assert_eq!(d.buy.unwrap().price, d.min_depth);
    }

    #[test]
    fn test_buy_sized_after_sell() {
        // Remaining exactly covers the sell leg, so the buy has nothing left.
        let d = decide(&config(), dec!(0.35), dec!(250000), None, &[]);
        assert_eq!(d.sell.unwrap().amount, dec!(250000));
        assert!(d.buy.is_none());
    }

    #[test]
    fn test_both_legs_fire() {
        let d = decide(&config(), dec!(0.35), dec!(5000000), None, &[]);
        assert!(d.sell.is_some());
        let buy = d.buy.unwrap();
        // 5M - 250k leaves plenty; buy still sized at base
        assert_eq!(buy.amount, dec!(250000));
    }

    #[test]
    fn test_decision_is_pure() {
        let book = bids(&[dec!(300000); 5]);
        let a = decide(&config(), dec!(0.32), dec!(4000000), Some(dec!(0.31)), &book);
        let b = decide(&config(), dec!(0.32), dec!(4000000), Some(dec!(0.31)), &book);
        assert_eq!(a, b);
    }

    #[test]
    fn test_mm_min_buy_picks_lowest_buy() {
        let orders = vec![
            gate_order("1", Side::Buy, dec!(0.28)),
            gate_order("2", Side::Buy, dec!(0.26)),
            gate_order("3", Side::Sell, dec!(0.20)),
        ];
        assert_eq!(mm_min_buy(&orders), Some(dec!(0.26)));
    }

    #[test]
    fn test_mm_min_buy_no_buys() {
        let orders = vec![gate_order("1", Side::Sell, dec!(0.31))];
        assert_eq!(mm_min_buy(&orders), None);
        assert_eq!(mm_min_buy(&[]), None);
    }

    fn gate_order(id: &str, side: Side, price: Decimal) -> GateOrder {
        GateOrder {
            id: id.into(),
            create_time: "1700000000".into(),
            currency_pair: "GMRT_USDT".into(),
            status: "open".into(),
            side,
            amount: dec!(10000),
            price,
            left: dec!(10000),
            user: Some(20368306),
        }
    }
}
