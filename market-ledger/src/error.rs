use thiserror::Error;

/// Why a buy or sell was rejected. A rejected operation leaves the ledger
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TradeError {
    /// Quantity text did not parse as a positive whole number.
    #[error("invalid quantity {0:?}: expected a positive whole number")]
    InvalidQuantity(String),

    #[error("unknown security {0:?}")]
    UnknownSecurity(String),

    #[error("insufficient funds: order costs {needed:.2}, balance is {available:.2}")]
    InsufficientFunds { needed: f64, available: f64 },

    #[error("insufficient shares: asked to sell {requested}, holding {held}")]
    InsufficientShares { requested: u32, held: u32 },
}
