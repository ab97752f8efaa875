//! Mock market simulation — runs the real decision engine with no network.
//!
//! A seeded random walk stands in for the venue: synthetic book, synthetic
//! market-maker orders, fills assumed at the quoted limit price. A buy
//! credits the bought amount back to inventory, so a long run oscillates
//! instead of draining.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;
use venues::types::{BookLevel, OrderBook};
use venues::Side;

use crate::sell::config::SellConfig;
use crate::sell::engine::{self, OrderIntent};
use crate::sell::inventory::Inventory;

/// Simulation parameters.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub cycles: u32,
    pub delay_ms: u64,
    pub start_price: Decimal,
    /// Per-cycle price change is uniform in `[-volatility, volatility]`
    /// plus the alternating trend.
    pub volatility: Decimal,
    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub sell: SellConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cycles: 30,
            delay_ms: 1000,
            start_price: dec!(0.35),
            volatility: dec!(0.03),
            seed: None,
            sell: SellConfig::default(),
        }
    }
}

/// One executed simulated trade.
#[derive(Debug, Clone, PartialEq)]
pub struct SimTrade {
    pub side: Side,
    pub price: Decimal,
    pub amount: Decimal,
}

/// End-of-run totals.
#[derive(Debug, Clone, PartialEq)]
pub struct SimSummary {
    pub remaining: Decimal,
    pub total_sold: Decimal,
    pub total_bought: Decimal,
    pub sell_value: Decimal,
    pub buy_value: Decimal,
    pub net_value: Decimal,
    pub trade_count: usize,
    /// Mean per-cycle price change in percent.
    pub avg_change_pct: f64,
    pub price_min: f64,
    pub price_max: f64,
}

/// Synthetic random-walk market.
struct MockMarket {
    rng: StdRng,
    price: f64,
    volatility: f64,
    history: Vec<f64>,
}

impl MockMarket {
    fn new(start_price: f64, volatility: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            price: start_price,
            volatility,
            history: Vec::new(),
        }
    }

    /// Advance the walk one cycle and return the new price.
    ///
    /// The trend flips every five cycles: down for the first half of
    /// each ten-cycle block, up for the second.
    fn step(&mut self) -> Decimal {
        let trend = if self.history.len() % 10 < 5 { -0.001 } else { 0.001 };
        let change = self.rng.gen_range(-self.volatility..=self.volatility) + trend;
        self.price *= 1.0 + change;
        self.history.push(self.price);
        to_decimal(self.price)
    }

    /// Five bids and five asks around the current price at a 1% spread.
    fn book(&mut self) -> OrderBook {
        let price = self.price;
        let spread = price * 0.01;
        let mut bids: Vec<BookLevel> = Vec::with_capacity(5);
        let mut asks: Vec<BookLevel> = Vec::with_capacity(5);
        for i in 0..5 {
            let size = self.rng.gen_range(1000.0..10000.0);
            bids.push([to_decimal(price - spread * (i + 1) as f64), to_decimal(size)]);
        }
        for i in 0..5 {
            let size = self.rng.gen_range(1000.0..10000.0);
            asks.push([to_decimal(price + spread * (i + 1) as f64), to_decimal(size)]);
        }
        OrderBook { bids, asks }
    }

    /// Synthetic market-maker orders: two buys below, one sell above.
    fn mm_orders(&self) -> Vec<OrderIntent> {
        vec![
            OrderIntent {
                side: Side::Buy,
                price: to_decimal(self.price * 0.99),
                amount: dec!(5000),
            },
            OrderIntent {
                side: Side::Buy,
                price: to_decimal(self.price * 0.98),
                amount: dec!(10000),
            },
            OrderIntent {
                side: Side::Sell,
                price: to_decimal(self.price * 1.01),
                amount: dec!(5000),
            },
        ]
    }
}

fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or_default()
        .round_dp(8)
}

/// Drives the decision engine against the mock market.
pub struct Simulator {
    config: SimConfig,
    market: MockMarket,
    inventory: Inventory,
    trades: Vec<SimTrade>,
    sell_value: Decimal,
    buy_value: Decimal,
}

impl Simulator {
    pub fn new(config: SimConfig) -> Self {
        let market = MockMarket::new(
            config.start_price.to_f64().unwrap_or_default(),
            config.volatility.to_f64().unwrap_or_default(),
            config.seed,
        );
        let inventory = Inventory::new(config.sell.total_tokens);
        Self {
            config,
            market,
            inventory,
            trades: Vec::new(),
            sell_value: Decimal::ZERO,
            buy_value: Decimal::ZERO,
        }
    }

    /// One simulated cycle: move the market, run the engine, fill at the
    /// quoted limit price.
    pub fn step(&mut self) {
        let price = self.market.step();
        let book = self.market.book();
        let mm_orders = self.market.mm_orders();
        let mm_floor = mm_orders
            .iter()
            .filter(|o| o.side == Side::Buy)
            .map(|o| o.price)
            .min();

        let decision = engine::decide(
            &self.config.sell,
            price,
            self.inventory.remaining(),
            mm_floor,
            &book.bids,
        );

        if let Some(sell) = decision.sell {
            let value = sell.amount * sell.price;
            self.inventory.record_sell(sell.amount);
            self.sell_value += value;
            info!(
                amount = %sell.amount,
                price = %sell.price,
                value = %value.round_dp(2),
                "SELL"
            );
            self.trades.push(SimTrade {
                side: Side::Sell,
                price: sell.price,
                amount: sell.amount,
            });
        }

        if let Some(buy) = decision.buy {
            let value = buy.amount * buy.price;
            self.inventory.record_buy(buy.amount);
            self.buy_value += value;
            info!(
                amount = %buy.amount,
                price = %buy.price,
                value = %value.round_dp(2),
                "BUY"
            );
            self.trades.push(SimTrade {
                side: Side::Buy,
                price: buy.price,
                amount: buy.amount,
            });
        }

        info!(
            cycle = self.market.history.len(),
            price = %price,
            remaining = %self.inventory.remaining(),
            best_bid = %book.bids[0][0],
            best_ask = %book.asks[0][0],
            "CYCLE"
        );
    }

    pub fn summary(&self) -> SimSummary {
        let history = &self.market.history;
        let changes: Vec<f64> = history
            .windows(2)
            .map(|w| 100.0 * (w[1] / w[0] - 1.0))
            .collect();
        let avg_change_pct = if changes.is_empty() {
            0.0
        } else {
            changes.iter().sum::<f64>() / changes.len() as f64
        };

        SimSummary {
            remaining: self.inventory.remaining(),
            total_sold: self.inventory.sold(),
            total_bought: self.inventory.bought(),
            sell_value: self.sell_value,
            buy_value: self.buy_value,
            net_value: self.sell_value - self.buy_value,
            trade_count: self.trades.len(),
            avg_change_pct,
            price_min: history.iter().copied().fold(f64::INFINITY, f64::min),
            price_max: history.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }

    pub fn trades(&self) -> &[SimTrade] {
        &self.trades
    }

    /// Run all configured cycles and log the final summary.
    pub async fn run(mut self) -> SimSummary {
        info!(
            cycles = self.config.cycles,
            start_price = %self.config.start_price,
            volatility = %self.config.volatility,
            total_tokens = %self.config.sell.total_tokens,
            min_sell = %self.config.sell.min_sell_price,
            floor = %self.config.sell.floor_price,
            "starting simulation"
        );

        for _ in 0..self.config.cycles {
            self.step();
            if self.config.delay_ms > 0 {
                tokio::time::sleep(std::time::Duration::from_millis(self.config.delay_ms)).await;
            }
        }

        let summary = self.summary();
        info!(
            remaining = %summary.remaining,
            sold = %summary.total_sold,
            sell_value = %summary.sell_value.round_dp(2),
            bought = %summary.total_bought,
            buy_value = %summary.buy_value.round_dp(2),
            net_value = %summary.net_value.round_dp(2),
            trades = summary.trade_count,
            avg_change_pct = format!("{:.2}", summary.avg_change_pct),
            price_range = format!("{:.4}-{:.4}", summary.price_min, summary.price_max),
            "SUMMARY"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64) -> SimConfig {
        SimConfig {
            cycles: 30,
            delay_ms: 0,
            seed: Some(seed),
            ..Default::default()
        }
    }

    fn run_sync(config: SimConfig) -> (Simulator, SimSummary) {
        let cycles = config.cycles;
        let mut sim = Simulator::new(config);
        for _ in 0..cycles {
            sim.step();
        }
        let summary = sim.summary();
        (sim, summary)
    }

    #[test]
    fn test_same_seed_same_run() {
        let (_, a) = run_sync(config(42));
        let (_, b) = run_sync(config(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_inventory_balance_identity() {
        let (_, summary) = run_sync(config(7));
        let total = SellConfig::default().total_tokens;
        assert_eq!(
            summary.remaining,
            total - summary.total_sold + summary.total_bought
        );
    }

    #[test]
    fn test_sells_never_below_threshold() {
        let (sim, _) = run_sync(config(1));
        let min_sell = SellConfig::default().min_sell_price;
        for trade in sim.trades() {
            if trade.side == Side::Sell {
                assert!(trade.price >= min_sell);
            }
        }
    }

    #[test]
    fn test_price_range_brackets_history() {
        let (_, summary) = run_sync(config(3));
        assert!(summary.price_min <= summary.price_max);
        assert!(summary.price_min > 0.0);
    }

    #[test]
    fn test_mock_book_shape() {
        let mut market = MockMarket::new(0.35, 0.03, Some(5));
        market.step();
        let book = market.book();
        assert_eq!(book.bids.len(), 5);
        assert_eq!(book.asks.len(), 5);
        // Bids below price, asks above, best level first.
        assert!(book.bids[0][0] > book.bids[4][0]);
        assert!(book.asks[0][0] < book.asks[4][0]);
        assert!(book.bids[0][0] < book.asks[0][0]);
    }

    #[test]
    fn test_mm_floor_is_lowest_buy() {
        let market = MockMarket::new(0.35, 0.03, Some(5));
        let orders = market.mm_orders();
        let floor = orders
            .iter()
            .filter(|o| o.side == Side::Buy)
            .map(|o| o.price)
            .min()
            .unwrap();
        assert_eq!(floor, to_decimal(0.35 * 0.98));
    }
}
