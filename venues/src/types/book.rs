use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One order book level: `[price, size]`.
pub type BookLevel = [Decimal; 2];

/// Order book snapshot normalized across venues.
///
/// Clients return books with bids sorted best (highest) first and asks
/// sorted best (lowest) first, regardless of venue order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    /// Each entry is `[price, size]`, highest price first.
    pub bids: Vec<BookLevel>,
    /// Each entry is `[price, size]`, lowest price first.
    pub asks: Vec<BookLevel>,
}

impl OrderBook {
    /// Sort bids descending and asks ascending by price.
    pub fn normalize(&mut self) {
        self.bids.sort_by(|a, b| b[0].cmp(&a[0]));
        self.asks.sort_by(|a, b| a[0].cmp(&b[0]));
    }

    /// Best bid price, if any.
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|l| l[0])
    }

    /// Best ask price, if any.
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|l| l[0])
    }

    /// Sum of the sizes of the best `depth` bid levels.
    pub fn bid_volume(&self, depth: usize) -> Decimal {
        self.bids.iter().take(depth).map(|l| l[1]).sum()
    }

    /// Sum of the sizes of the best `depth` ask levels.
    pub fn ask_volume(&self, depth: usize) -> Decimal {
        self.asks.iter().take(depth).map(|l| l[1]).sum()
    }
}

/// Gate.io order book response (`GET /api/v4/spot/order_book`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateBook {
    /// Book version; only present when requested with `with_id=true`.
    #[serde(default)]
    pub id: Option<u64>,
    /// Response generation time (ms).
    pub current: u64,
    /// Last book change time (ms).
    pub update: u64,
    /// Each entry is `[price, size]`.
    pub asks: Vec<BookLevel>,
    /// Each entry is `[price, size]`.
    pub bids: Vec<BookLevel>,
}

impl From<GateBook> for OrderBook {
    fn from(raw: GateBook) -> Self {
        let mut book = OrderBook {
            bids: raw.bids,
            asks: raw.asks,
        };
        book.normalize();
        book
    }
}

/// MEXC depth response (`GET /api/v3/depth`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MexcDepth {
    pub last_update_id: u64,
    /// Each entry is `[price, size]`.
    pub bids: Vec<BookLevel>,
    /// Each entry is `[price, size]`.
    pub asks: Vec<BookLevel>,
}

impl From<MexcDepth> for OrderBook {
    fn from(raw: MexcDepth) -> Self {
        let mut book = OrderBook {
            bids: raw.bids,
            asks: raw.asks,
        };
        book.normalize();
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn book() -> OrderBook {
        OrderBook {
            bids: vec![
                [dec!(0.31), dec!(1000)],
                [dec!(0.30), dec!(2000)],
                [dec!(0.29), dec!(3000)],
            ],
            asks: vec![[dec!(0.33), dec!(500)], [dec!(0.34), dec!(1500)]],
        }
    }

    #[test]
    fn test_best_levels() {
        let book = book();
        assert_eq!(book.best_bid(), Some(dec!(0.31)));
        assert_eq!(book.best_ask(), Some(dec!(0.33)));
    }

    #[test]
    fn test_best_levels_empty() {
        let book = OrderBook {
            bids: vec![],
            asks: vec![],
        };
        assert_eq!(book.best_bid(), None);
        assert_eq!(book.best_ask(), None);
    }

    #[test]
    fn test_volume_depth_clamps() {
        let book = book();
        assert_eq!(book.bid_volume(2), dec!(3000));
        assert_eq!(book.bid_volume(10), dec!(6000));
        assert_eq!(book.ask_volume(10), dec!(2000));
        assert_eq!(book.ask_volume(0), dec!(0));
    }

    #[test]
    fn test_normalize_sorts_both_sides() {
        let mut book = OrderBook {
            bids: vec![
                [dec!(0.29), dec!(1)],
                [dec!(0.31), dec!(2)],
                [dec!(0.30), dec!(3)],
            ],
            asks: vec![[dec!(0.35), dec!(1)], [dec!(0.33), dec!(2)]],
        };
        book.normalize();
        assert_eq!(book.bids[0][0], dec!(0.31));
        assert_eq!(book.bids[2][0], dec!(0.29));
        assert_eq!(book.asks[0][0], dec!(0.33));
    }
}
