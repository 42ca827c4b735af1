use super::market::{PriceBoard, SecurityId};
use serde::{Deserialize, Serialize};

fn default_starting_balance() -> f64 {
    10_000.0
}

fn default_tick_delta() -> f64 {
    50.0
}

fn default_price_floor() -> f64 {
    1.0
}

/// A security listed at market open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    id: String,
    price: f64,
}

impl SecurityConfig {
    pub fn new(id: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            price,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Market definition: the listings plus the knobs of the price walk.
/// The listing order here is the display order everywhere downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    #[serde(default = "default_starting_balance")]
    starting_balance: f64,
    /// Per-tick price change is uniform in [-tick_delta, +tick_delta].
    #[serde(default = "default_tick_delta")]
    tick_delta: f64,
    /// Prices are clamped to this minimum after every tick.
    #[serde(default = "default_price_floor")]
    price_floor: f64,
    securities: Vec<SecurityConfig>,
}

impl MarketConfig {
    pub fn new(securities: Vec<SecurityConfig>) -> Self {
        Self {
            starting_balance: default_starting_balance(),
            tick_delta: default_tick_delta(),
            price_floor: default_price_floor(),
            securities,
        }
    }

    pub fn with_starting_balance(mut self, balance: f64) -> Self {
        self.starting_balance = balance;
        self
    }

    pub fn with_tick_delta(mut self, delta: f64) -> Self {
        self.tick_delta = delta;
        self
    }

    pub fn starting_balance(&self) -> f64 {
        self.starting_balance
    }

    pub fn tick_delta(&self) -> f64 {
        self.tick_delta
    }

    pub fn price_floor(&self) -> f64 {
        self.price_floor
    }

    pub fn securities(&self) -> &[SecurityConfig] {
        &self.securities
    }

    /// Builds the opening price board, in listing order.
    pub fn board(&self) -> PriceBoard {
        let mut board = PriceBoard::default();
        for listing in &self.securities {
            board.insert(SecurityId::new(listing.id.clone()), listing.price);
        }
        board
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self::new(vec![
            SecurityConfig::new("TCS", 3200.0),
            SecurityConfig::new("INFY", 1500.0),
            SecurityConfig::new("RELIANCE", 2900.0),
            SecurityConfig::new("HDFC", 1650.0),
            SecurityConfig::new("SBIN", 780.0),
        ])
    }
}
