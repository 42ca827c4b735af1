use market_ledger::models::{MarketConfig, SecurityConfig, SecurityId, Side};
use market_ledger::{MarketLedger, TradeError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn ledger_with(balance: f64, listings: &[(&str, f64)]) -> MarketLedger {
    let securities = listings
        .iter()
        .map(|(id, price)| SecurityConfig::new(*id, *price))
        .collect();
    MarketLedger::new(&MarketConfig::new(securities).with_starting_balance(balance))
}

#[test]
fn balance_and_holdings_never_negative_across_random_sequences() {
    let mut ledger = MarketLedger::new(&MarketConfig::default());
    let mut rng = StdRng::seed_from_u64(2024);

    let ids: Vec<String> = ledger
        .securities()
        .map(|(id, _)| id.as_str().to_string())
        .collect();

    for step in 0..500 {
        if step % 3 == 0 {
            ledger.tick_with(&mut rng);
        }

        let id = &ids[rng.gen_range(0..ids.len())];
        let qty = rng.gen_range(1..=5).to_string();

        // Rejections are expected along the way; the invariants must hold
        // regardless of which branch each operation takes.
        if rng.gen_bool(0.5) {
            let _ = ledger.buy(id, &qty);
        } else {
            let _ = ledger.sell(id, &qty);
        }

        assert!(
            ledger.balance() >= 0.0,
            "Balance went negative: {}",
            ledger.balance()
        );
        for (id, holding) in ledger.holdings().iter() {
            assert!(
                holding.quantity() > 0,
                "Zero-quantity holding left behind for {}",
                id
            );
        }
    }
}

#[test]
fn sell_after_ticks_realizes_against_original_basis() {
    let mut ledger = ledger_with(50_000.0, &[("ACME", 3000.0)]);
    let mut rng = StdRng::seed_from_u64(11);

    ledger.buy("ACME", "2").unwrap();
    let basis = 3000.0;

    for _ in 0..25 {
        ledger.tick_with(&mut rng);
    }

    let acme = SecurityId::new("ACME");
    let market_price = ledger.price(&acme).unwrap();
    let receipt = ledger.sell("ACME", "1").unwrap();

    assert!((receipt.price - market_price).abs() < 1e-6);
    assert!((receipt.profit - (market_price - basis)).abs() < 1e-6);
    assert!((ledger.total_profit() - receipt.profit).abs() < 1e-6);

    // The untouched share still carries the original basis.
    let holding = ledger.holdings().get(&acme).unwrap();
    assert_eq!(holding.quantity(), 1);
    assert!((holding.avg_price() - basis).abs() < 1e-6);
}

#[test]
fn round_trip_at_constant_price_is_profit_neutral() {
    let mut ledger = ledger_with(10_000.0, &[("ACME", 1234.5)]);

    ledger.buy("ACME", "4").unwrap();
    let receipt = ledger.sell("ACME", "4").unwrap();

    assert!((receipt.profit).abs() < 1e-6);
    assert!((ledger.balance() - 10_000.0).abs() < 1e-6);
    assert!((ledger.total_profit()).abs() < 1e-6);
}

#[test]
fn rejected_operations_do_not_touch_state() {
    let mut ledger = ledger_with(1_000.0, &[("ACME", 400.0)]);
    ledger.buy("ACME", "2").unwrap();

    let balance = ledger.balance();
    let profit = ledger.total_profit();
    let trades = ledger.history().count();

    assert!(matches!(
        ledger.buy("ACME", "100"),
        Err(TradeError::InsufficientFunds { .. })
    ));
    assert!(matches!(
        ledger.sell("ACME", "3"),
        Err(TradeError::InsufficientShares { .. })
    ));
    assert!(matches!(
        ledger.buy("ACME", "-5"),
        Err(TradeError::InvalidQuantity(_))
    ));
    assert!(matches!(
        ledger.sell("GHOST", "1"),
        Err(TradeError::UnknownSecurity(_))
    ));

    assert!((ledger.balance() - balance).abs() < 1e-6);
    assert!((ledger.total_profit() - profit).abs() < 1e-6);
    assert_eq!(ledger.history().count(), trades);
    assert_eq!(
        ledger.holdings().quantity(&SecurityId::new("ACME")),
        2,
        "Holding changed on a rejected operation"
    );
}

#[test]
fn history_replays_full_trade_sequence() {
    let mut ledger = ledger_with(100_000.0, &[("AAA", 100.0), ("BBB", 50.0)]);

    ledger.buy("AAA", "10").unwrap();
    ledger.buy("BBB", "20").unwrap();
    ledger.sell("AAA", "5").unwrap();

    let expected = [
        (Side::Buy, "AAA", 10, 1000.0),
        (Side::Buy, "BBB", 20, 1000.0),
        (Side::Sell, "AAA", 5, 500.0),
    ];

    for pass in 0..2 {
        let trades: Vec<_> = ledger.history().collect();
        assert_eq!(trades.len(), expected.len(), "Pass {}", pass);
        for (trade, (side, id, qty, total)) in trades.iter().zip(expected.iter()) {
            assert_eq!(trade.side(), *side);
            assert_eq!(trade.security().as_str(), *id);
            assert_eq!(trade.quantity(), *qty);
            assert!((trade.total() - total).abs() < 1e-6);
        }
    }
}

#[test]
fn tick_floors_prices_at_the_configured_minimum() {
    // A listing that opens right at the floor can only move up or stay put.
    let mut ledger = ledger_with(10_000.0, &[("PENNY", 1.0)]);
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..200 {
        ledger.tick_with(&mut rng);
        let price = ledger.price(&SecurityId::new("PENNY")).unwrap();
        assert!(price >= 1.0, "Price {} fell through the floor", price);
    }
}
