//! Book - the owned aggregate of all matching state.
//!
//! One `Book` bundles the order arena, the shared price-indexed limit
//! arena, and the two price queues. It is constructed once from a
//! `BookConfig` and owned by the engine, so independent books (one
//! per symbol, or one per test) are just independent values.
//!
//! Ask prices live negated in their queue so the max-heap sorts them
//! as a min-heap; the negation never escapes this module.

use serde::{Deserialize, Serialize};

use crate::arena::OrderArena;
use crate::error::BookError;
use crate::limits::LimitArena;
use crate::order::{Order, OrderId, PricePoint, RawOrder, Side};
use crate::price_queue::{PriceKey, PriceQueue};

/// Capacity parameters, fixed at construction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BookConfig {
    /// Maximum number of concurrently resting orders.
    pub max_orders: u32,
    /// Exclusive price ceiling; prices index the limit arena, so this
    /// is also the number of representable price points.
    pub max_price: PricePoint,
}

impl BookConfig {
    /// Build a config from explicit capacities.
    pub const fn new(max_orders: u32, max_price: PricePoint) -> Self {
        Self {
            max_orders,
            max_price,
        }
    }
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            max_orders: 1 << 20,
            max_price: 1 << 16,
        }
    }
}

/// The limit order book: resting orders on both sides plus the
/// structures answering "best price right now".
#[derive(Debug)]
pub struct Book {
    pub(crate) orders: OrderArena,
    pub(crate) limits: LimitArena,
    /// Active bid prices, max-heap.
    bid_queue: PriceQueue,
    /// Active ask prices, negated, so the max-heap yields the minimum.
    ask_queue: PriceQueue,
    config: BookConfig,
}

impl Book {
    /// Create an empty book with the given capacities.
    pub fn new(config: BookConfig) -> Self {
        Self {
            orders: OrderArena::new(config.max_orders),
            limits: LimitArena::new(config.max_price),
            bid_queue: PriceQueue::new(config.max_price as usize),
            ask_queue: PriceQueue::new(config.max_price as usize),
            config,
        }
    }

    /// The capacities this book was built with.
    #[inline]
    pub fn config(&self) -> BookConfig {
        self.config
    }

    /// Reject prices the limit arena cannot index.
    #[inline]
    pub(crate) fn check_price(&self, price: PricePoint) -> Result<(), BookError> {
        if price >= self.config.max_price {
            return Err(BookError::PriceOutOfRange {
                price,
                max: self.config.max_price,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Best price access
    // ========================================================================

    /// Highest active bid price.
    #[inline]
    pub fn best_bid(&self) -> Option<PricePoint> {
        self.bid_queue.peek().map(|key| key as PricePoint)
    }

    /// Lowest active ask price.
    #[inline]
    pub fn best_ask(&self) -> Option<PricePoint> {
        self.ask_queue.peek().map(|key| (-key) as PricePoint)
    }

    /// Best price on the given side.
    #[inline]
    pub fn best_price(&self, side: Side) -> Option<PricePoint> {
        match side {
            Side::Bid => self.best_bid(),
            Side::Ask => self.best_ask(),
        }
    }

    /// Spread between the two sides, when both are present.
    pub fn spread(&self) -> Option<PricePoint> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) if ask > bid => Some(ask - bid),
            _ => None,
        }
    }

    // ========================================================================
    // Order management
    // ========================================================================

    /// Link an already-populated order into its price level.
    ///
    /// An empty level becomes active here: its price is pushed onto
    /// the order's side's queue exactly once, on this transition.
    pub(crate) fn insert_order(&mut self, id: OrderId) -> Result<(), BookError> {
        let (side, price) = {
            let order = self.orders.get(id);
            (order.side, order.price)
        };

        if self.limits.level(price).is_empty() {
            match side {
                Side::Bid => self.bid_queue.add(price as PriceKey)?,
                Side::Ask => self.ask_queue.add(-(price as PriceKey))?,
            }
        }

        self.limits.level_mut(price).push_back(&mut self.orders, id);
        Ok(())
    }

    /// Unlink an order from its level and recycle its slot.
    ///
    /// Queue entries are untouched: a level emptied here is cleaned
    /// up lazily by the next traversal that reaches its price.
    pub(crate) fn remove_order(&mut self, id: OrderId) -> Result<(), BookError> {
        let price = self.orders.get(id).price;
        self.limits.level_mut(price).remove(&mut self.orders, id);
        self.orders.release(id)
    }

    /// Allocate a slot for an unmatched remainder and rest it.
    pub(crate) fn rest_order(&mut self, raw: &RawOrder, size: u32) -> Result<OrderId, BookError> {
        let id = self.orders.allocate()?;

        let order = self.orders.get_mut(id);
        order.side = raw.side;
        order.size = size;
        order.trader_id = raw.trader_id;
        order.price = raw.price;
        order.symbol_id = raw.symbol_id;

        self.insert_order(id)?;
        Ok(id)
    }

    /// Drop the best entry on a side, once its level is drained.
    pub(crate) fn pop_best(&mut self, side: Side) -> Result<PricePoint, BookError> {
        match side {
            Side::Bid => self.bid_queue.pop().map(|key| key as PricePoint),
            Side::Ask => self.ask_queue.pop().map(|key| (-key) as PricePoint),
        }
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// The order record behind `id`. A released slot reads as a
    /// zeroed record.
    #[inline]
    pub fn order(&self, id: OrderId) -> &Order {
        self.orders.get(id)
    }

    /// Aggregate resting size at one price.
    #[inline]
    pub fn depth_at(&self, price: PricePoint) -> u64 {
        self.limits.level(price).size
    }

    /// Number of orders currently resting.
    #[inline]
    pub fn order_count(&self) -> u32 {
        self.orders.allocated()
    }

    /// True when nothing rests on either side.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
