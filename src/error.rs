//! Typed failures surfaced by the book and its containers.

use thiserror::Error;

use crate::order::PricePoint;

/// Errors returned to the `accept` caller.
///
/// The fixed-capacity containers underneath the book (arena, heaps,
/// free list) never read or write out of bounds; when a capacity or
/// contract is violated they fail loudly with one of these variants
/// instead. There is no retry policy here: the caller decides whether
/// to reject, queue, or reprocess the order.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BookError {
    /// No free order slot is left and the incoming remainder cannot rest.
    #[error("order arena exhausted ({capacity} slots in use)")]
    ArenaExhausted {
        /// Configured arena capacity.
        capacity: u32,
    },

    /// The order's price does not fit the configured limit arena.
    #[error("price {price} outside configured range (must be < {max})")]
    PriceOutOfRange {
        /// Offending price.
        price: PricePoint,
        /// Exclusive price ceiling the book was built with.
        max: PricePoint,
    },

    /// A fixed-capacity queue was pushed past its capacity.
    ///
    /// Unreachable through the engine's own logic; it indicates a
    /// broken invariant such as a double release.
    #[error("priority queue full")]
    QueueFull,

    /// A queue was popped while empty.
    #[error("priority queue empty")]
    QueueEmpty,

    /// Orders must carry a strictly positive size.
    #[error("order size must be positive")]
    ZeroSize,
}
