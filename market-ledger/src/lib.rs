pub mod error;
pub mod ledger;
pub mod models;

pub use error::TradeError;
pub use ledger::{BuyReceipt, MarketLedger, SellReceipt};
