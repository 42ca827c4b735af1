use super::market::SecurityId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Quantity owned and weighted-average cost basis for one security.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    quantity: u32,
    avg_price: f64,
}

impl Holding {
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Quantity-weighted mean purchase price of the unresolved buys.
    pub fn avg_price(&self) -> f64 {
        self.avg_price
    }
}

/// Represents the current state of holdings.
///
/// A security has an entry only while its quantity is above zero; selling
/// a position down to zero removes the entry, so the next buy establishes
/// a fresh cost basis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Holdings {
    positions: HashMap<SecurityId, Holding>,
}

impl Holdings {
    pub fn get(&self, security: &SecurityId) -> Option<&Holding> {
        self.positions.get(security)
    }

    pub fn quantity(&self, security: &SecurityId) -> u32 {
        self.positions.get(security).map(|h| h.quantity).unwrap_or(0)
    }

    /// Folds a buy fill into the position. The average reprices to the
    /// quantity-weighted mean of the old basis and the new fill:
    /// `(old_avg * old_qty + price * qty) / (old_qty + qty)`.
    pub fn accumulate(&mut self, security: &SecurityId, quantity: u32, price: f64) {
        let entry = self
            .positions
            .entry(security.clone())
            .or_insert(Holding {
                quantity: 0,
                avg_price: 0.0,
            });
        let old_qty = entry.quantity as f64;
        let add_qty = quantity as f64;
        entry.avg_price = (entry.avg_price * old_qty + price * add_qty) / (old_qty + add_qty);
        entry.quantity += quantity;
    }

    /// Removes a sell fill from the position and returns the realized
    /// profit, `(price - avg) * qty`. Selling never reprices the average;
    /// the entry is dropped when the quantity reaches zero.
    ///
    /// With no position on the books the basis falls back to the execution
    /// price, realizing zero. Callers that check the held quantity first
    /// never reach that fallback.
    pub fn realize(&mut self, security: &SecurityId, quantity: u32, price: f64) -> f64 {
        let basis = self
            .positions
            .get(security)
            .map(|h| h.avg_price)
            .unwrap_or(price);
        let profit = (price - basis) * quantity as f64;

        if let Some(holding) = self.positions.get_mut(security) {
            holding.quantity = holding.quantity.saturating_sub(quantity);
            if holding.quantity == 0 {
                self.positions.remove(security);
            }
        }

        profit
    }

    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, SecurityId, Holding> {
        self.positions.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
