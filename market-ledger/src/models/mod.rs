pub mod config;
pub mod history;
pub mod holding;
pub mod market;

pub use config::*;
pub use history::*;
pub use holding::*;
pub use market::*;
