//! Execution reporting - the trade notification boundary.
//!
//! The engine emits one notification per fill, fire-and-forget; no
//! return value flows back into matching. Consumers plug in a sink to
//! persist or publish trades downstream.

use serde::{Deserialize, Serialize};

use crate::order::PricePoint;

/// One executed trade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Execution {
    /// Instrument traded
    pub symbol_id: u32,
    /// Trader on the buy side of the fill
    pub buyer_id: u64,
    /// Trader on the sell side of the fill
    pub seller_id: u64,
    /// Trade price: always the incoming order's limit
    pub price: PricePoint,
    /// Trade size
    pub size: u32,
}

/// Receiver for trade notifications.
pub trait ExecutionSink {
    /// Called once per fill.
    fn execute(&mut self, execution: Execution);
}

/// Collects executions in order; the sink used throughout the tests.
impl ExecutionSink for Vec<Execution> {
    #[inline]
    fn execute(&mut self, execution: Execution) {
        self.push(execution);
    }
}

/// Emits one structured log event per trade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ExecutionSink for LogSink {
    fn execute(&mut self, execution: Execution) {
        tracing::info!(
            symbol = execution.symbol_id,
            buyer = execution.buyer_id,
            seller = execution.seller_id,
            price = execution.price,
            size = execution.size,
            "trade executed"
        );
    }
}

/// Discards every execution. Useful for benchmarks.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ExecutionSink for NullSink {
    #[inline]
    fn execute(&mut self, _execution: Execution) {}
}
