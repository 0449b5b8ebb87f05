//! Limit arena - price levels addressed directly by price.
//!
//! Each `Limit` holds a FIFO queue of the orders resting at one exact
//! price, as a doubly-linked list threaded through arena handles.
//! The level owns the list structurally but not the orders' memory,
//! which lives in the order arena. Insertion at the tail and removal
//! from any position are O(1).
//!
//! The arena is one shared price-indexed array, not one per side: the
//! no-cross invariant keeps both sides from resting at one price at
//! the same time, so a level slot may serve bids at one moment and
//! asks later. Which side a level currently belongs to is decided by
//! the priority queue holding its price.

use crate::arena::OrderArena;
use crate::order::{OrderId, PricePoint};

/// All resting liquidity at one exact price.
///
/// A level with no head has no resting orders; its price must not be
/// live in either priority queue except transiently, pending lazy
/// cleanup by the next traversal that reaches it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Limit {
    /// Oldest order (first to match)
    pub head: Option<OrderId>,
    /// Newest order (last to match)
    pub tail: Option<OrderId>,
    /// Aggregate outstanding size across the level
    pub size: u64,
}

impl Limit {
    /// An empty level.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            size: 0,
        }
    }

    /// True when no order rests at this price.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Append an order at the tail (newest position) and grow the
    /// aggregate by its size.
    pub fn push_back(&mut self, orders: &mut OrderArena, id: OrderId) {
        let size = orders.get(id).size;

        match self.tail {
            None => {
                debug_assert!(self.head.is_none());
                self.head = Some(id);
                self.tail = Some(id);
                let order = orders.get_mut(id);
                order.prev = None;
                order.next = None;
            }
            Some(tail) => {
                orders.get_mut(tail).next = Some(id);
                let order = orders.get_mut(id);
                order.prev = Some(tail);
                order.next = None;
                self.tail = Some(id);
            }
        }

        self.size += size as u64;
    }

    /// Unlink an order from wherever it sits in the list and shrink
    /// the aggregate by its current size.
    ///
    /// The order's record is left linked-out but intact; releasing
    /// the slot is the caller's job. Returns `true` when the level is
    /// now empty.
    pub fn remove(&mut self, orders: &mut OrderArena, id: OrderId) -> bool {
        let order = orders.get(id);
        let prev = order.prev;
        let next = order.next;
        let size = order.size;

        match (prev, next) {
            // Sole order in the level
            (None, None) => {
                debug_assert!(self.head == Some(id) && self.tail == Some(id));
                self.head = None;
                self.tail = None;
            }
            // Head of a longer list
            (None, Some(next)) => {
                debug_assert!(self.head == Some(id));
                self.head = Some(next);
                orders.get_mut(next).prev = None;
            }
            // Tail of a longer list
            (Some(prev), None) => {
                debug_assert!(self.tail == Some(id));
                self.tail = Some(prev);
                orders.get_mut(prev).next = None;
            }
            // Interior
            (Some(prev), Some(next)) => {
                orders.get_mut(prev).next = Some(next);
                orders.get_mut(next).prev = Some(prev);
            }
        }

        self.size -= size as u64;

        let order = orders.get_mut(id);
        order.prev = None;
        order.next = None;

        self.head.is_none()
    }

    /// Shrink the aggregate after an order was partially filled in
    /// place.
    #[inline]
    pub fn reduce(&mut self, size: u32) {
        debug_assert!(self.size >= size as u64);
        self.size -= size as u64;
    }
}

/// Fixed-capacity storage of price levels, indexed by price value.
///
/// The price range is bounded by the configured ceiling, which bounds
/// the arena size; callers validate prices before indexing.
pub struct LimitArena {
    levels: Vec<Limit>,
}

impl LimitArena {
    /// Create an arena covering prices `0..price_points`.
    pub fn new(price_points: PricePoint) -> Self {
        Self {
            levels: vec![Limit::new(); price_points as usize],
        }
    }

    /// Exclusive upper bound on representable prices.
    #[inline]
    pub fn price_points(&self) -> PricePoint {
        self.levels.len() as PricePoint
    }

    /// The level at `price`.
    #[inline]
    pub fn level(&self, price: PricePoint) -> &Limit {
        debug_assert!((price as usize) < self.levels.len(), "price out of bounds");
        &self.levels[price as usize]
    }

    /// The level at `price`, mutably.
    #[inline]
    pub fn level_mut(&mut self, price: PricePoint) -> &mut Limit {
        debug_assert!((price as usize) < self.levels.len(), "price out of bounds");
        &mut self.levels[price as usize]
    }
}

impl std::fmt::Debug for LimitArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let active = self.levels.iter().filter(|l| !l.is_empty()).count();
        f.debug_struct("LimitArena")
            .field("price_points", &self.levels.len())
            .field("active_levels", &active)
            .finish()
    }
}
