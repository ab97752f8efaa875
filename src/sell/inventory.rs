//! Remaining-inventory bookkeeping.
//!
//! Inventory moves on *placement*, not on fill: the original strategy
//! counts tokens as gone the moment a sell order goes on the book.

use rust_decimal::Decimal;

/// Token inventory counter for one bot run.
#[derive(Debug, Clone)]
pub struct Inventory {
    total: Decimal,
    remaining: Decimal,
    sold: Decimal,
    bought: Decimal,
}

impl Inventory {
    pub fn new(total: Decimal) -> Self {
        Self {
            total,
            remaining: total,
            sold: Decimal::ZERO,
            bought: Decimal::ZERO,
        }
    }

    pub fn remaining(&self) -> Decimal {
        self.remaining
    }

    pub fn sold(&self) -> Decimal {
        self.sold
    }

    pub fn bought(&self) -> Decimal {
        self.bought
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining <= Decimal::ZERO
    }

    /// Debit a placed sell. Amounts above `remaining` are clamped.
    pub fn record_sell(&mut self, amount: Decimal) {
        let amount = amount.min(self.remaining);
        self.remaining -= amount;
        self.sold += amount;
    }

    /// Credit a filled buy (simulation only; the live bot never credits).
    pub fn record_buy(&mut self, amount: Decimal) {
        self.remaining += amount;
        self.bought += amount;
    }
}
