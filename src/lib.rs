//! # Arena-LOB
//!
//! An arena-backed limit order book matching engine with price-time
//! (FIFO) priority.
//!
//! ## Design Principles
//!
//! - **No allocation in the hot path**: orders live in a
//!   pre-allocated arena; slots recycle through a LIFO free list
//! - **Price-indexed levels**: a price is its level's identity and
//!   its index into the limit arena
//! - **O(log n) best-price tracking**: one binary heap of active
//!   prices per side, with lazy cleanup of drained levels
//! - **Single-threaded**: `accept` runs to completion; a book is one
//!   unit of state, guarded externally if shared
//!
//! ## Architecture
//!
//! ```text
//! RawOrder --> [MatchingEngine::accept] --> Execution notifications
//!                     |
//!              [Book: order arena + limit arena + price queues]
//! ```

pub mod arena;
pub mod book;
pub mod error;
pub mod execution;
pub mod free_list;
pub mod limits;
pub mod matching;
pub mod multi;
pub mod order;
pub mod price_queue;

// Re-exports for convenience
pub use arena::OrderArena;
pub use book::{Book, BookConfig};
pub use error::BookError;
pub use execution::{Execution, ExecutionSink, LogSink, NullSink};
pub use free_list::FreeList;
pub use limits::{Limit, LimitArena};
pub use matching::{MatchingEngine, Placement};
pub use multi::MultiBook;
pub use order::{Order, OrderId, PricePoint, RawOrder, Side};
pub use price_queue::PriceQueue;
