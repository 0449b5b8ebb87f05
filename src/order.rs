//! Order types: the raw submission and the arena-resident record.

use serde::{Deserialize, Serialize};

/// Arena slot index. Doubles as the order's public handle: an order's
/// id is stable for its whole lifetime because the arena never moves
/// or compacts records.
pub type OrderId = u32;

/// Price in integer ticks. Prices index the limit arena directly, so
/// the configured price ceiling bounds the arena size.
pub type PricePoint = u32;

/// Order side (bid = buy, ask = sell)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    /// Buy side (bids)
    Bid = 0,
    /// Sell side (asks)
    Ask = 1,
}

impl Side {
    /// Returns the opposite side
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }
}

/// An order as submitted by the caller, before it touches the book.
///
/// The core has no parsing or wire responsibility; this is the whole
/// ingestion boundary.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RawOrder {
    /// Order side (bid/ask)
    pub side: Side,
    /// Limit price in ticks
    pub price: PricePoint,
    /// Order size
    pub size: u32,
    /// Originating trader
    pub trader_id: u64,
    /// Instrument the order trades
    pub symbol_id: u32,
}

/// A resting order inside the arena.
///
/// Sibling links are arena handles (`Option<OrderId>`), giving each
/// price level a doubly-linked FIFO queue without pointers. The
/// owning level is identified by `price`: levels are indexed directly
/// by price, so no separate back-reference is needed.
///
/// A live order's `size` is strictly positive; a zeroed record marks
/// a slot that is free or pending reuse.
#[derive(Clone, Copy, Debug)]
pub struct Order {
    /// Order side (bid/ask)
    pub side: Side,
    /// Remaining size to fill
    pub size: u32,
    /// Originating trader
    pub trader_id: u64,
    /// Limit price; also identifies the owning price level
    pub price: PricePoint,
    /// Instrument the order trades
    pub symbol_id: u32,
    /// Next order at the same price level (toward the tail)
    pub next: Option<OrderId>,
    /// Previous order at the same price level (toward the head)
    pub prev: Option<OrderId>,
}

impl Order {
    /// An unallocated/cleared record.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            side: Side::Bid,
            size: 0,
            trader_id: 0,
            price: 0,
            symbol_id: 0,
            next: None,
            prev: None,
        }
    }

    /// Zero the record when its slot is returned to the free list.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::empty();
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::empty()
    }
}
