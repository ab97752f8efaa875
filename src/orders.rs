//! Active-order bookkeeping — track, cancel, and log the bot's own orders.
//!
//! The bot only ever cancels ids it placed itself; there is no blanket
//! cancel-all against the venue.

use tracing::{info, warn};
use venues::{GateClient, Pair, Side};

use crate::sell::engine::OrderIntent;

/// Order ids the bot placed and has not yet cancelled.
#[derive(Debug, Default)]
pub struct ActiveOrders {
    ids: Vec<String>,
}

impl ActiveOrders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: String) {
        self.ids.push(id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Drain all tracked ids.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.ids)
    }
}

/// Cancel every tracked order, dropping each id regardless of outcome.
///
/// A cancel error usually means the venue already filled or expired the
/// order, so the id is forgotten either way.
pub async fn cancel_all(client: &GateClient, pair: &Pair, orders: &mut ActiveOrders) {
    for id in orders.take() {
        match client.cancel_order(pair, &id).await {
            Ok(_) => info!(order_id = %id, "cancelled"),
            Err(e) => warn!(order_id = %id, error = %e, "cancel failed, dropping id"),
        }
    }
}

/// Compact one-line form of a set of intents, e.g. `S@0.30x250000 B@0.294x250000`.
pub fn format_intents(intents: &[&OrderIntent]) -> String {
    if intents.is_empty() {
        return "-".into();
    }
    intents
        .iter()
        .map(|i| {
            let s = match i.side {
                Side::Buy => "B",
                Side::Sell => "S",
            };
            format!("{s}@{}x{}", i.price, i.amount)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_active_orders_take_drains() {
        let mut orders = ActiveOrders::new();
        orders.push("101".into());
        orders.push("102".into());
        assert_eq!(orders.len(), 2);
        let ids = orders.take();
        assert_eq!(ids, vec!["101".to_string(), "102".to_string()]);
        assert!(orders.is_empty());
    }

    #[test]
    fn test_format_intents() {
        let sell = OrderIntent {
            side: Side::Sell,
            price: dec!(0.30),
            amount: dec!(250000),
        };
        let buy = OrderIntent {
            side: Side::Buy,
            price: dec!(0.294),
            amount: dec!(250000),
        };
        assert_eq!(
            format_intents(&[&sell, &buy]),
            "S@0.30x250000 B@0.294x250000"
        );
        assert_eq!(format_intents(&[]), "-");
    }
}
