//! Stress tests - push the book to its limits.
//!
//! Near-capacity operation, exhaustion surfacing, slot churn, and
//! deep sweeps across many price levels.

use arena_lob::{BookConfig, BookError, Execution, MatchingEngine, Placement, RawOrder, Side};

fn raw(side: Side, price: u32, size: u32, trader_id: u64) -> RawOrder {
    RawOrder {
        side,
        price,
        size,
        trader_id,
        symbol_id: 1,
    }
}

#[test]
fn test_near_capacity_fill() {
    const CAPACITY: u32 = 10_000;
    let mut engine = MatchingEngine::new(BookConfig::new(CAPACITY, 1 << 14));
    let mut sink: Vec<Execution> = Vec::new();

    // Non-overlapping prices: bids 8000-8099, asks 10000-10099.
    for i in 0..CAPACITY as u64 {
        let (side, price) = if i % 2 == 0 {
            (Side::Bid, 8000 + (i % 100) as u32)
        } else {
            (Side::Ask, 10_000 + (i % 100) as u32)
        };
        let placement = engine.accept(raw(side, price, 100, i), &mut sink).unwrap();
        assert!(matches!(placement, Placement::Rested(_)));
    }

    assert!(sink.is_empty());
    assert_eq!(engine.order_count(), CAPACITY);

    // The arena is full; one more resting order must fail loudly.
    assert_eq!(
        engine.accept(raw(Side::Bid, 8000, 1, 99_999), &mut sink),
        Err(BookError::ArenaExhausted { capacity: CAPACITY })
    );
    assert_eq!(engine.order_count(), CAPACITY);
}

#[test]
fn test_crossing_still_works_at_capacity() {
    const CAPACITY: u32 = 100;
    let mut engine = MatchingEngine::new(BookConfig::new(CAPACITY, 1 << 14));
    let mut sink: Vec<Execution> = Vec::new();

    for i in 0..CAPACITY as u64 {
        engine
            .accept(raw(Side::Ask, 10_000 + i as u32, 10, i), &mut sink)
            .unwrap();
    }
    assert_eq!(engine.order_count(), CAPACITY);

    // A crossing bid frees maker slots as it fills, so it can even
    // rest its remainder in a just-recycled slot.
    let placement = engine
        .accept(raw(Side::Bid, 10_001, 25, 500), &mut sink)
        .unwrap();

    assert!(matches!(placement, Placement::Rested(_)));
    assert_eq!(sink.len(), 3);
    assert_eq!(
        sink.iter().map(|e| e.size).collect::<Vec<_>>(),
        vec![10, 10, 5]
    );
    assert_eq!(engine.order_count(), CAPACITY - 1);
}

#[test]
fn test_rapid_churn_reuses_slots() {
    const CYCLES: usize = 50_000;
    let mut engine = MatchingEngine::new(BookConfig::new(4, 256));
    let mut sink: Vec<Execution> = Vec::new();

    // Rest one ask, drain it, repeat. Four slots serve the whole run.
    for i in 0..CYCLES {
        let placement = engine
            .accept(raw(Side::Ask, 100, 5, i as u64), &mut sink)
            .unwrap();
        assert!(matches!(placement, Placement::Rested(_)));

        let placement = engine
            .accept(raw(Side::Bid, 100, 5, i as u64), &mut sink)
            .unwrap();
        assert_eq!(placement, Placement::Filled);
    }

    assert!(engine.book.is_empty());
    assert_eq!(sink.len(), CYCLES);
    assert!(sink.iter().all(|e| e.size == 5 && e.price == 100));
}

#[test]
fn test_single_level_contention() {
    const ORDERS: u64 = 1_000;
    let mut engine = MatchingEngine::new(BookConfig::new(2_000, 256));
    let mut sink: Vec<Execution> = Vec::new();

    for i in 0..ORDERS {
        engine.accept(raw(Side::Ask, 100, 10, i), &mut sink).unwrap();
    }
    assert_eq!(engine.book.depth_at(100), 10 * ORDERS);

    // One bid sweeps the whole level; fills come out in FIFO order.
    let placement = engine
        .accept(raw(Side::Bid, 100, 10 * ORDERS as u32, 9_999), &mut sink)
        .unwrap();

    assert_eq!(placement, Placement::Filled);
    assert_eq!(sink.len(), ORDERS as usize);
    for (i, execution) in sink.iter().enumerate() {
        assert_eq!(execution.seller_id, i as u64);
    }
    assert!(engine.book.is_empty());
    assert_eq!(engine.best_ask(), None);
}

#[test]
fn test_sweep_many_levels() {
    const LEVELS: u32 = 1_000;
    let mut engine = MatchingEngine::new(BookConfig::new(2_000, 1 << 14));
    let mut sink: Vec<Execution> = Vec::new();

    for i in 0..LEVELS {
        engine
            .accept(raw(Side::Ask, 1_000 + i, 1, i as u64), &mut sink)
            .unwrap();
    }

    let placement = engine
        .accept(raw(Side::Bid, 1_000 + LEVELS, LEVELS, 9_999), &mut sink)
        .unwrap();

    assert_eq!(placement, Placement::Filled);
    assert_eq!(sink.len(), LEVELS as usize);
    // Best price first, every fill at the taker's limit.
    assert_eq!(sink[0].seller_id, 0);
    assert_eq!(sink[LEVELS as usize - 1].seller_id, LEVELS as u64 - 1);
    assert!(sink.iter().all(|e| e.price == 1_000 + LEVELS));

    assert_eq!(engine.best_ask(), None);
    assert!(engine.book.is_empty());
}

#[test]
fn test_alternating_partial_fills() {
    let mut engine = MatchingEngine::new(BookConfig::new(16, 256));
    let mut sink: Vec<Execution> = Vec::new();

    let Placement::Rested(maker) = engine
        .accept(raw(Side::Ask, 100, 1_000_000, 1), &mut sink)
        .unwrap()
    else {
        panic!("ask should rest");
    };

    // Chip away at one large maker; its id stays stable throughout.
    for i in 0..1_000u32 {
        let placement = engine
            .accept(raw(Side::Bid, 100, 100, 2 + i as u64), &mut sink)
            .unwrap();
        assert_eq!(placement, Placement::FilledAgainst(maker));
    }

    assert_eq!(engine.book.order(maker).size, 1_000_000 - 100 * 1_000);
    assert_eq!(engine.book.depth_at(100), (1_000_000 - 100 * 1_000) as u64);
    assert_eq!(engine.order_count(), 1);
}
