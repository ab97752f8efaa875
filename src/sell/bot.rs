//! Sell bot orchestrator.
//!
//! Polls Gate.io on a fixed interval and drives the threshold engine:
//! fetch price and book, cancel last cycle's orders, decide, place.

use std::time::Duration;

use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use venues::{GateClient, GateConfig, GateOrder, OrderRequest, Side};

use crate::error::Result;
use crate::orders::{cancel_all, format_intents, ActiveOrders};
use crate::sell::config::SellConfig;
use crate::sell::engine::{self, OrderIntent};
use crate::sell::inventory::Inventory;

/// Order book depth requested each cycle. The engine only reads the best
/// five bid levels.
const BOOK_LIMIT: u32 = 10;

/// Top-level sell bot.
pub struct SellBot {
    config: SellConfig,
    gate: GateConfig,
}

/// Keep only the tracked market maker's orders.
pub fn filter_mm_orders(orders: Vec<GateOrder>, uid: u64) -> Vec<GateOrder> {
    orders
        .into_iter()
        .filter(|o| o.user == Some(uid))
        .collect()
}

impl SellBot {
    /// Create a new sell bot (does not connect yet).
    pub fn new(config: SellConfig, gate: GateConfig) -> Self {
        Self { config, gate }
    }

    /// Run the bot until `cancel` is triggered or inventory runs out.
    ///
    /// Each cycle:
    /// 1. Fetch the last traded price.
    /// 2. Fetch the order book.
    /// 3. Fetch the tracked market maker's open orders (when configured).
    /// 4. Cancel the bot's own orders from the previous cycle.
    /// 5. Decide and place this cycle's orders.
    ///
    /// On shutdown, any still-open orders the bot placed are cancelled.
    pub async fn run(&self, cancel: CancellationToken) -> Result<()> {
        let client = GateClient::new(&self.gate);
        let mut inventory = Inventory::new(self.config.total_tokens);
        let mut active = ActiveOrders::new();

        info!(
            pair = %self.config.pair,
            min_sell = %self.config.min_sell_price,
            floor = %self.config.floor_price,
            launch = %self.config.launch_price,
            base_amount = %self.config.base_amount,
            depth_pct = %self.config.depth_pct,
            total_tokens = %self.config.total_tokens,
            dry_run = self.config.dry_run,
            "CONFIG"
        );

        let mut interval = time::interval(Duration::from_secs(self.config.interval_secs));

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.cycle(&client, &mut inventory, &mut active).await;
                    if inventory.is_exhausted() {
                        info!(sold = %inventory.sold(), "inventory exhausted, stopping");
                        break;
                    }
                }
                _ = cancel.cancelled() => {
                    info!("shutting down");
                    break;
                }
            }
        }

        // Leave the book clean.
        if !active.is_empty() {
            let count = active.len();
            cancel_all(&client, &self.config.pair, &mut active).await;
            info!(count, "cancelled remaining orders, goodbye");
        } else {
            info!("no active orders, goodbye");
        }

        Ok(())
    }

    /// One polling cycle. Fetch errors log and wait for the next tick.
    async fn cycle(
        &self,
        client: &GateClient,
        inventory: &mut Inventory,
        active: &mut ActiveOrders,
    ) {
        let config = &self.config;

        let price = match client.last_price(&config.pair).await {
            Ok(Some(p)) => p,
            Ok(None) => {
                warn!(pair = %config.pair, "no last price, retrying next cycle");
                return;
            }
            Err(e) => {
                warn!(error = %e, "price fetch failed, retrying next cycle");
                return;
            }
        };

        let book = match client.order_book(&config.pair, BOOK_LIMIT).await {
            Ok(b) => b,
            Err(e) => {
                warn!(error = %e, "order book fetch failed, retrying next cycle");
                return;
            }
        };

        // MM buy levels anchor the buy leg. A fetch error degrades to an
        // empty list rather than skipping the cycle.
        let mm_orders = match config.mm_uid {
            Some(uid) if !config.dry_run => match client.open_orders(&config.pair).await {
                Ok(orders) => filter_mm_orders(orders, uid),
                Err(e) => {
                    warn!(error = %e, "open orders fetch failed, assuming none");
                    Vec::new()
                }
            },
            _ => Vec::new(),
        };
        let mm_floor = engine::mm_min_buy(&mm_orders);

        // Re-quote from scratch every cycle.
        if config.dry_run {
            active.take();
        } else {
            cancel_all(client, &config.pair, active).await;
        }

        let decision = engine::decide(config, price, inventory.remaining(), mm_floor, &book.bids);

        let intents: Vec<&OrderIntent> =
            decision.sell.iter().chain(decision.buy.iter()).collect();
        info!(
            price = %price,
            depth = format!("{}-{}", decision.min_depth, decision.max_depth),
            remaining = %inventory.remaining(),
            orders = format_intents(&intents),
            "CYCLE"
        );

        if let Some(sell) = &decision.sell {
            self.place(client, inventory, active, sell).await;
        }
        if let Some(buy) = &decision.buy {
            self.place(client, inventory, active, buy).await;
        }
    }

    /// Place one order (or log it in dry-run mode).
    ///
    /// Inventory is debited when a sell goes on the book; a placement
    /// error leaves the inventory untouched.
    async fn place(
        &self,
        client: &GateClient,
        inventory: &mut Inventory,
        active: &mut ActiveOrders,
        intent: &OrderIntent,
    ) {
        if self.config.dry_run {
            info!(
                side = %intent.side,
                price = %intent.price,
                amount = %intent.amount,
                "would place (dry run)"
            );
            if intent.side == Side::Sell {
                inventory.record_sell(intent.amount);
            }
            return;
        }

        let request =
            OrderRequest::limit(&self.config.pair, intent.side, intent.price, intent.amount);
        match client.place_order(&request).await {
            Ok(order) => {
                info!(
                    order_id = %order.id,
                    side = %intent.side,
                    price = %intent.price,
                    amount = %intent.amount,
                    "PLACED"
                );
                active.push(order.id);
                if intent.side == Side::Sell {
                    inventory.record_sell(intent.amount);
                }
            }
            Err(e) => {
                error!(side = %intent.side, error = %e, "order placement failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn order(id: &str, user: Option<u64>) -> GateOrder {
        GateOrder {
            id: id.into(),
            create_time: "1700000000".into(),
            currency_pair: "GMRT_USDT".into(),
            status: "open".into(),
            side: Side::Buy,
            amount: dec!(10000),
            price: dec!(0.28),
            left: dec!(10000),
            user,
        }
    }

    #[test]
    fn test_filter_mm_orders_keeps_only_uid() {
        let orders = vec![
            order("1", Some(20368306)),
            order("2", Some(99)),
            order("3", None),
        ];
        let kept = filter_mm_orders(orders, 20368306);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "1");
    }

    #[test]
    fn test_filter_mm_orders_empty() {
        assert!(filter_mm_orders(Vec::new(), 20368306).is_empty());
    }
}
