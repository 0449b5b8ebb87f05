//! Matching engine - the accept/cross/rest algorithm.
//!
//! An incoming order first crosses against the opposing side's best
//! price levels in price-time order; whatever survives the crossing
//! phase rests in the book as a new order.

use crate::book::{Book, BookConfig};
use crate::error::BookError;
use crate::execution::{Execution, ExecutionSink};
use crate::order::{OrderId, PricePoint, RawOrder, Side};

/// Outcome of a successful `accept` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The unfilled remainder rests in the book under a freshly
    /// allocated id.
    Rested(OrderId),
    /// The incoming order was fully absorbed by a larger resting
    /// order, which stays in the book under the returned id. No new
    /// order was created.
    FilledAgainst(OrderId),
    /// The incoming order exactly drained resting liquidity; nothing
    /// rests and no id was allocated.
    Filled,
}

/// What happened while walking one price level.
enum LevelOutcome {
    /// Incoming fully absorbed by a larger resting order.
    Absorbed(OrderId),
    /// Level emptied; this much incoming size is still unfilled.
    Drained(u32),
    /// Incoming exactly consumed mid-level; the level keeps resting
    /// orders and stays in its queue.
    TakerFilled,
}

/// The matching engine. Owns the book and runs `accept` against it,
/// synchronously and to completion.
#[derive(Debug)]
pub struct MatchingEngine {
    /// Book state owned by the engine
    pub book: Book,
}

impl MatchingEngine {
    /// Create an engine over a fresh book.
    pub fn new(config: BookConfig) -> Self {
        Self {
            book: Book::new(config),
        }
    }

    /// Accept an incoming order: match it against resting liquidity,
    /// then rest any remainder.
    ///
    /// Every fill notifies `sink` once, priced at the incoming
    /// order's own limit. The first fill that only partially consumes
    /// a resting order ends matching entirely: the incoming order is
    /// spent, and deeper levels are never touched.
    pub fn accept<S: ExecutionSink>(
        &mut self,
        raw: RawOrder,
        sink: &mut S,
    ) -> Result<Placement, BookError> {
        if raw.size == 0 {
            return Err(BookError::ZeroSize);
        }
        self.book.check_price(raw.price)?;

        let opposing = raw.side.opposite();
        let mut remaining = raw.size;

        // Crossing phase: consume opposing levels from the best price
        // inward while the incoming order still crosses and has size
        // left. Stops the instant the opposing side is exhausted.
        while remaining > 0 {
            let best = match self.book.best_price(opposing) {
                Some(price) => price,
                None => break,
            };
            if !Self::prices_cross(raw.side, raw.price, best) {
                break;
            }

            match self.fill_level(&raw, best, remaining, sink)? {
                LevelOutcome::Absorbed(maker) => return Ok(Placement::FilledAgainst(maker)),
                LevelOutcome::Drained(left) => {
                    self.book.pop_best(opposing)?;
                    remaining = left;
                }
                LevelOutcome::TakerFilled => remaining = 0,
            }
        }

        if remaining == 0 {
            return Ok(Placement::Filled);
        }

        // Resting phase: the leftover becomes a new resting order.
        let id = self.book.rest_order(&raw, remaining)?;
        Ok(Placement::Rested(id))
    }

    /// Does an incoming price trade against the opposing best?
    #[inline]
    const fn prices_cross(side: Side, taker: PricePoint, maker: PricePoint) -> bool {
        match side {
            // Buyer pays at least the lowest ask
            Side::Bid => taker >= maker,
            // Seller accepts at most the highest bid
            Side::Ask => taker <= maker,
        }
    }

    /// Walk one level's FIFO queue from the head, filling until the
    /// level drains or the incoming size runs out.
    fn fill_level<S: ExecutionSink>(
        &mut self,
        raw: &RawOrder,
        price: PricePoint,
        mut remaining: u32,
        sink: &mut S,
    ) -> Result<LevelOutcome, BookError> {
        // A stale queue entry points at an already-empty level; the
        // walk sees no head and reports it drained, so the caller
        // pops it and moves on.
        let mut cursor = self.book.limits.level(price).head;

        while let Some(maker_id) = cursor {
            let maker = self.book.orders.get(maker_id);
            let maker_size = maker.size;
            let maker_trader = maker.trader_id;
            // Capture before removal; removal clears the record.
            let next = maker.next;
            debug_assert!(maker_size > 0, "resting orders carry positive size");

            if maker_size <= remaining {
                // Full fill: the resting order leaves the book.
                sink.execute(Self::execution(raw, maker_trader, maker_size));
                remaining -= maker_size;
                self.book.remove_order(maker_id)?;
                cursor = next;

                if remaining == 0 {
                    return Ok(if next.is_none() {
                        LevelOutcome::Drained(0)
                    } else {
                        LevelOutcome::TakerFilled
                    });
                }
            } else {
                // Partial fill: the resting order outlasts the
                // incoming one, shrinking in place.
                sink.execute(Self::execution(raw, maker_trader, remaining));
                self.book.orders.get_mut(maker_id).size = maker_size - remaining;
                self.book.limits.level_mut(price).reduce(remaining);
                return Ok(LevelOutcome::Absorbed(maker_id));
            }
        }

        Ok(LevelOutcome::Drained(remaining))
    }

    /// Build the trade notification for one fill. The taker's limit
    /// price is the trade price.
    fn execution(raw: &RawOrder, maker_trader: u64, size: u32) -> Execution {
        let (buyer_id, seller_id) = match raw.side {
            Side::Bid => (raw.trader_id, maker_trader),
            Side::Ask => (maker_trader, raw.trader_id),
        };
        Execution {
            symbol_id: raw.symbol_id,
            buyer_id,
            seller_id,
            price: raw.price,
            size,
        }
    }

    // ========================================================================
    // Passthroughs
    // ========================================================================

    /// Best bid price.
    #[inline]
    pub fn best_bid(&self) -> Option<PricePoint> {
        self.book.best_bid()
    }

    /// Best ask price.
    #[inline]
    pub fn best_ask(&self) -> Option<PricePoint> {
        self.book.best_ask()
    }

    /// Spread between the sides.
    #[inline]
    pub fn spread(&self) -> Option<PricePoint> {
        self.book.spread()
    }

    /// Number of resting orders.
    #[inline]
    pub fn order_count(&self) -> u32 {
        self.book.order_count()
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new(BookConfig::default())
    }
}
