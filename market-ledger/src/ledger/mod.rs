use crate::error::TradeError;
use crate::models::{History, Holdings, MarketConfig, PriceBoard, SecurityId, Transaction};
use log::{info, warn};
use rand::Rng;

/// Result of a settled buy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuyReceipt {
    pub price: f64,
    pub total: f64,
}

/// Result of a settled sell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SellReceipt {
    pub price: f64,
    pub total: f64,
    pub profit: f64,
}

/// The single owned market state: price board, cash balance, holdings,
/// cumulative realized profit and trade history.
///
/// All mutation goes through [`tick`](Self::tick), [`buy`](Self::buy) and
/// [`sell`](Self::sell); callers that share a ledger between a timer and a
/// command loop serialize those calls behind one lock.
pub struct MarketLedger {
    board: PriceBoard,
    holdings: Holdings,
    balance: f64,
    total_profit: f64,
    history: History,
    tick_delta: f64,
    price_floor: f64,
}

impl MarketLedger {
    pub fn new(config: &MarketConfig) -> Self {
        Self {
            board: config.board(),
            holdings: Holdings::default(),
            balance: config.starting_balance(),
            total_profit: 0.0,
            history: History::default(),
            tick_delta: config.tick_delta(),
            price_floor: config.price_floor(),
        }
    }

    /// Listed securities with their current prices, in listing order.
    pub fn securities(&self) -> impl Iterator<Item = (&SecurityId, f64)> + '_ {
        self.board.iter()
    }

    pub fn price(&self, security: &SecurityId) -> Option<f64> {
        self.board.get(security)
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Cumulative realized profit across all sells.
    pub fn total_profit(&self) -> f64 {
        self.total_profit
    }

    pub fn holdings(&self) -> &Holdings {
        &self.holdings
    }

    /// Settled trades in execution order; re-readable in full.
    pub fn history(&self) -> impl Iterator<Item = &Transaction> + '_ {
        self.history.iter()
    }

    /// One price-update cycle over every listed security.
    pub fn tick(&mut self) {
        self.tick_with(&mut rand::thread_rng());
    }

    /// Perturbs every price by a uniform delta in `[-tick_delta,
    /// +tick_delta]`, clamped to the price floor. The listing set never
    /// changes.
    pub fn tick_with<R: Rng>(&mut self, rng: &mut R) {
        let (delta, floor) = (self.tick_delta, self.price_floor);
        for price in self.board.prices_mut() {
            let change = rng.gen_range(-delta..=delta);
            *price = (*price + change).max(floor);
        }
    }

    /// Buys `qty_text` shares of `security` at the current price.
    ///
    /// Debits the balance, folds the fill into the holding at a
    /// quantity-weighted average, and appends a Buy transaction.
    pub fn buy(&mut self, security: &str, qty_text: &str) -> Result<BuyReceipt, TradeError> {
        let quantity = parse_quantity(qty_text)?;
        let (id, price) = self.quote(security)?;

        let total = price * quantity as f64;
        if total > self.balance {
            warn!(
                "buy {} x{} rejected: costs {:.2}, balance {:.2}",
                id, quantity, total, self.balance
            );
            return Err(TradeError::InsufficientFunds {
                needed: total,
                available: self.balance,
            });
        }

        self.balance -= total;
        self.holdings.accumulate(&id, quantity, price);
        self.history
            .record(Transaction::buy(id.clone(), quantity, price, total));

        info!("bought {} {} at {:.2} for {:.2}", quantity, id, price, total);
        Ok(BuyReceipt { price, total })
    }

    /// Sells `qty_text` shares of `security` at the current price.
    ///
    /// Credits the proceeds, realizes profit against the holding's average
    /// buy price, and appends a Sell transaction carrying the profit.
    pub fn sell(&mut self, security: &str, qty_text: &str) -> Result<SellReceipt, TradeError> {
        let quantity = parse_quantity(qty_text)?;
        let (id, price) = self.quote(security)?;

        let held = self.holdings.quantity(&id);
        if held < quantity {
            warn!(
                "sell {} x{} rejected: holding only {}",
                id, quantity, held
            );
            return Err(TradeError::InsufficientShares {
                requested: quantity,
                held,
            });
        }

        let total = price * quantity as f64;
        let profit = self.holdings.realize(&id, quantity, price);
        self.balance += total;
        self.total_profit += profit;
        self.history
            .record(Transaction::sell(id.clone(), quantity, price, total, profit));

        info!(
            "sold {} {} at {:.2} for {:.2}, realized {:.2}",
            quantity, id, price, total, profit
        );
        Ok(SellReceipt {
            price,
            total,
            profit,
        })
    }

    fn quote(&self, security: &str) -> Result<(SecurityId, f64), TradeError> {
        let id = SecurityId::new(security);
        match self.board.get(&id) {
            Some(price) => Ok((id, price)),
            None => Err(TradeError::UnknownSecurity(security.to_string())),
        }
    }

    #[cfg(test)]
    fn set_price(&mut self, security: &str, price: f64) {
        self.board.insert(SecurityId::new(security), price);
    }
}

fn parse_quantity(text: &str) -> Result<u32, TradeError> {
    match text.trim().parse::<u32>() {
        Ok(qty) if qty > 0 => Ok(qty),
        _ => Err(TradeError::InvalidQuantity(text.to_string())),
    }
}
