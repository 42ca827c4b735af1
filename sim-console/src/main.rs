mod render;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use market_ledger::models::MarketConfig;
use market_ledger::MarketLedger;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Milliseconds between market price updates
    #[arg(long, default_value_t = 2000)]
    pub tick_ms: u64,

    /// Starting cash balance (overrides the market file)
    #[arg(long)]
    pub balance: Option<f64>,

    /// Market definition file (JSON); defaults to the built-in listings
    #[arg(long)]
    pub market: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<MarketConfig> {
    let mut config = match &args.market {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading market file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing market file {}", path.display()))?
        }
        None => MarketConfig::default(),
    };
    if let Some(balance) = args.balance {
        config = config.with_starting_balance(balance);
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let ledger = Arc::new(Mutex::new(MarketLedger::new(&config)));

    println!("Welcome to the stock market simulator!");
    {
        let ledger = ledger.lock().unwrap();
        render::print_market(&ledger);
        render::print_balance(&ledger);
    }
    render::print_help();

    // Periodic price tick. The ledger lock serializes it against trades
    // from the command loop.
    let ticker = Arc::clone(&ledger);
    let tick_ms = args.tick_ms;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(tick_ms));
        interval.tick().await; // the first tick fires immediately; skip it
        loop {
            interval.tick().await;
            ticker.lock().unwrap().tick();
            debug!("market tick applied");
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("market") => render::print_market(&ledger.lock().unwrap()),
            Some("balance") => render::print_balance(&ledger.lock().unwrap()),
            Some("holdings") => render::print_holdings(&ledger.lock().unwrap()),
            Some("history") => render::print_history(&ledger.lock().unwrap()),
            Some("help") => render::print_help(),
            Some("buy") => match (parts.next(), parts.next()) {
                (Some(stock), Some(qty)) => {
                    match ledger.lock().unwrap().buy(stock, qty) {
                        Ok(receipt) => render::notify_bought(stock, qty, &receipt),
                        Err(err) => render::notify_rejected(&err),
                    }
                }
                _ => println!("usage: buy <STOCK> <QTY>"),
            },
            Some("sell") => match (parts.next(), parts.next()) {
                (Some(stock), Some(qty)) => {
                    match ledger.lock().unwrap().sell(stock, qty) {
                        Ok(receipt) => render::notify_sold(stock, qty, &receipt),
                        Err(err) => render::notify_rejected(&err),
                    }
                }
                _ => println!("usage: sell <STOCK> <QTY>"),
            },
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command {:?}; type `help`", other),
            None => {}
        }
    }

    Ok(())
}
