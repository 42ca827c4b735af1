use super::market::SecurityId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

/// One settled trade, as shown in the history table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    id: Uuid,
    timestamp: i64,
    side: Side,
    security: SecurityId,
    quantity: u32,
    price: f64,
    total: f64,
    /// Realized profit or loss; present only on sells.
    profit: Option<f64>,
}

impl Transaction {
    pub fn buy(security: SecurityId, quantity: u32, price: f64, total: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            side: Side::Buy,
            security,
            quantity,
            price,
            total,
            profit: None,
        }
    }

    pub fn sell(security: SecurityId, quantity: u32, price: f64, total: f64, profit: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            side: Side::Sell,
            security,
            quantity,
            price,
            total,
            profit: Some(profit),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn security(&self) -> &SecurityId {
        &self.security
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn profit(&self) -> Option<f64> {
        self.profit
    }
}

/// Append-only record of settled trades, kept in execution order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    transactions: Vec<Transaction>,
}

impl History {
    pub fn record(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Re-iterable in full; order is insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
