//! Text rendering for the console front end.
//!
//! Everything here is presentation only: table layout, 2-decimal currency
//! formatting, and the notification line for each trade outcome. No trading
//! logic lives in this module.

use chrono::DateTime;
use market_ledger::models::Side;
use market_ledger::{BuyReceipt, MarketLedger, SellReceipt, TradeError};

pub fn print_market(ledger: &MarketLedger) {
    println!();
    println!("  {:<10} {:>12}", "Stock", "Price");
    println!("  {:-<10} {:->12}", "", "");
    for (id, price) in ledger.securities() {
        println!("  {:<10} {:>12.2}", id.as_str(), price);
    }
    println!();
}

pub fn print_balance(ledger: &MarketLedger) {
    println!("  Balance: {:.2}", ledger.balance());
    println!("  Total profit: {:.2}", ledger.total_profit());
}

pub fn print_holdings(ledger: &MarketLedger) {
    if ledger.holdings().is_empty() {
        println!("  (no holdings)");
        return;
    }
    println!();
    println!("  {:<10} {:>8} {:>12}", "Stock", "Qty", "Avg Price");
    println!("  {:-<10} {:->8} {:->12}", "", "", "");
    // Walk the board so holdings render in listing order, not map order.
    for (id, _) in ledger.securities() {
        if let Some(holding) = ledger.holdings().get(id) {
            println!(
                "  {:<10} {:>8} {:>12.2}",
                id.as_str(),
                holding.quantity(),
                holding.avg_price()
            );
        }
    }
    println!();
}

pub fn print_history(ledger: &MarketLedger) {
    if ledger.history().next().is_none() {
        println!("  (no trades yet)");
        return;
    }
    println!();
    println!(
        "  {:<8} {:<6} {:<10} {:>6} {:>12} {:>12} {:>12}",
        "Time", "Action", "Stock", "Qty", "Price", "Total", "Profit"
    );
    for trade in ledger.history() {
        let time = DateTime::from_timestamp_millis(trade.timestamp())
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_default();
        let side = match trade.side() {
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        };
        let profit = match trade.profit() {
            Some(p) => format!("{:.2}", p),
            None => "-".to_string(),
        };
        println!(
            "  {:<8} {:<6} {:<10} {:>6} {:>12.2} {:>12.2} {:>12}",
            time,
            side,
            trade.security().as_str(),
            trade.quantity(),
            trade.price(),
            trade.total(),
            profit
        );
    }
    println!();
}

pub fn notify_bought(security: &str, qty_text: &str, receipt: &BuyReceipt) {
    println!(
        ">> Bought {} {} at {:.2} (total {:.2})",
        qty_text, security, receipt.price, receipt.total
    );
}

pub fn notify_sold(security: &str, qty_text: &str, receipt: &SellReceipt) {
    let outcome = if receipt.profit >= 0.0 {
        format!("profit {:.2}", receipt.profit)
    } else {
        format!("loss {:.2}", -receipt.profit)
    };
    println!(
        ">> Sold {} {} at {:.2} (total {:.2}, {})",
        qty_text, security, receipt.price, receipt.total, outcome
    );
}

pub fn notify_rejected(err: &TradeError) {
    let message = match err {
        TradeError::InvalidQuantity(_) => "Invalid quantity!".to_string(),
        TradeError::UnknownSecurity(id) => format!("No such stock: {}", id),
        TradeError::InsufficientFunds { .. } => "Insufficient balance!".to_string(),
        TradeError::InsufficientShares { .. } => "Not enough shares to sell!".to_string(),
    };
    println!("!! {}", message);
}

pub fn print_help() {
    println!("Commands:");
    println!("  market              show current prices");
    println!("  buy <STOCK> <QTY>   buy shares at the market price");
    println!("  sell <STOCK> <QTY>  sell shares at the market price");
    println!("  balance             show cash balance and total profit");
    println!("  holdings            show owned shares and average buy price");
    println!("  history             show the transaction log");
    println!("  help                show this message");
    println!("  quit                exit the simulator");
}
