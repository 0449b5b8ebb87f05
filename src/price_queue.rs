//! Price queue - fixed-capacity binary max-heap of price keys.
//!
//! Backed by a 1-indexed complete binary tree: the root sits at
//! position 1 and the children of node `i` at `2i` and `2i + 1`.
//! The book keeps two instances, one over bid prices and one over
//! negated ask prices (so the max-heap acts as a min-heap), each
//! holding at most one entry per active price level.
//!
//! Duplicate suppression is not enforced here: callers push a price
//! only on a level's empty-to-active transition.

use crate::error::BookError;

/// Heap key. Prices are `u32`; asks are stored negated, hence the
/// wider signed type.
pub type PriceKey = i64;

/// A bounded binary max-heap answering "best price right now" in O(1).
#[derive(Debug)]
pub struct PriceQueue {
    /// 1-indexed storage; element 0 is an unused sentinel.
    heap: Vec<PriceKey>,
    /// Maximum number of live entries.
    capacity: usize,
}

impl PriceQueue {
    /// Create an empty queue that can hold `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        let mut heap = Vec::with_capacity(capacity + 1);
        heap.push(0); // sentinel, never read
        Self { heap, capacity }
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len() - 1
    }

    /// True when no entry is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the queue is at capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Return the maximum key without removing it.
    #[inline]
    pub fn peek(&self) -> Option<PriceKey> {
        if self.is_empty() {
            None
        } else {
            Some(self.heap[1])
        }
    }

    /// Insert a key, appending it at the next free leaf and sifting
    /// up until the heap property holds again.
    pub fn add(&mut self, key: PriceKey) -> Result<(), BookError> {
        if self.is_full() {
            return Err(BookError::QueueFull);
        }

        self.heap.push(key);
        let mut i = self.len();
        while i > 1 && self.heap[i] > self.heap[i / 2] {
            self.heap.swap(i, i / 2);
            i /= 2;
        }
        Ok(())
    }

    /// Remove and return the maximum key.
    ///
    /// The last leaf moves into the root position and sifts down,
    /// swapping with the larger child until ordered.
    pub fn pop(&mut self) -> Result<PriceKey, BookError> {
        if self.is_empty() {
            return Err(BookError::QueueEmpty);
        }

        let top = self.heap[1];
        let last = self.heap[self.len()];
        self.heap.truncate(self.heap.len() - 1);

        if !self.is_empty() {
            self.heap[1] = last;
            self.sift_down(1);
        }
        Ok(top)
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.len();
        loop {
            let left = 2 * i;
            let right = left + 1;
            let mut largest = i;

            if left <= len && self.heap[left] > self.heap[largest] {
                largest = left;
            }
            if right <= len && self.heap[right] > self.heap[largest] {
                largest = right;
            }
            if largest == i {
                break;
            }
            self.heap.swap(i, largest);
            i = largest;
        }
    }
}
