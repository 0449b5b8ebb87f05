//! Book-per-symbol routing.
//!
//! The matching core is symbol-agnostic per invocation; deployments
//! that trade several instruments give each symbol its own book and
//! route on the incoming order's symbol id. Books are created lazily,
//! all sharing one capacity config.

use rustc_hash::FxHashMap;

use crate::book::BookConfig;
use crate::error::BookError;
use crate::execution::ExecutionSink;
use crate::matching::{MatchingEngine, Placement};
use crate::order::RawOrder;

/// A set of independent books keyed by symbol id.
#[derive(Debug, Default)]
pub struct MultiBook {
    config: BookConfig,
    books: FxHashMap<u32, MatchingEngine>,
}

impl MultiBook {
    /// Create an empty router; every book it opens uses `config`.
    pub fn new(config: BookConfig) -> Self {
        Self {
            config,
            books: FxHashMap::default(),
        }
    }

    /// Route an order to its symbol's book, opening the book on first
    /// contact with the symbol.
    pub fn accept<S: ExecutionSink>(
        &mut self,
        raw: RawOrder,
        sink: &mut S,
    ) -> Result<Placement, BookError> {
        let config = self.config;
        let engine = self.books.entry(raw.symbol_id).or_insert_with(|| {
            tracing::debug!(symbol = raw.symbol_id, "opening book");
            MatchingEngine::new(config)
        });
        engine.accept(raw, sink)
    }

    /// The book for `symbol_id`, if any order has touched it.
    #[inline]
    pub fn book(&self, symbol_id: u32) -> Option<&MatchingEngine> {
        self.books.get(&symbol_id)
    }

    /// Number of books opened so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True when no book has been opened.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
