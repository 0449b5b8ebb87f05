//! Order arena - fixed-capacity pre-allocated order storage.
//!
//! The arena allocates its whole slot range up front, so accepting an
//! order never touches the heap. Slot ids are drawn from a LIFO free
//! list and recycled in O(1). Records never move or compact: an id
//! handed out stays valid until the order is released, which is what
//! lets the level lists link orders by index.

use std::fmt;

use crate::error::BookError;
use crate::free_list::FreeList;
use crate::order::{Order, OrderId};

/// Pre-allocated pool of order records addressed by slot id.
pub struct OrderArena {
    /// Contiguous block of order records
    slots: Vec<Order>,
    /// Recyclable slot ids
    free: FreeList,
    /// Total capacity
    capacity: u32,
}

impl OrderArena {
    /// Create an arena with `capacity` slots, all initially free.
    pub fn new(capacity: u32) -> Self {
        Self {
            slots: vec![Order::empty(); capacity as usize],
            free: FreeList::new(capacity),
            capacity,
        }
    }

    /// Draw a free slot.
    ///
    /// The caller populates the record. Exhaustion means the book is
    /// at capacity and is a hard error, never a dangling slot.
    #[inline]
    pub fn allocate(&mut self) -> Result<OrderId, BookError> {
        self.free.pop().ok_or(BookError::ArenaExhausted {
            capacity: self.capacity,
        })
    }

    /// Zero a record and return its slot to the free list.
    #[inline]
    pub fn release(&mut self, id: OrderId) -> Result<(), BookError> {
        debug_assert!(id < self.capacity, "id out of bounds");
        self.slots[id as usize].reset();
        self.free.push(id)
    }

    /// Immutable access to a record.
    #[inline]
    pub fn get(&self, id: OrderId) -> &Order {
        debug_assert!(id < self.capacity, "id out of bounds");
        &self.slots[id as usize]
    }

    /// Mutable access to a record.
    #[inline]
    pub fn get_mut(&mut self, id: OrderId) -> &mut Order {
        debug_assert!(id < self.capacity, "id out of bounds");
        &mut self.slots[id as usize]
    }

    /// Number of currently allocated slots.
    #[inline]
    pub fn allocated(&self) -> u32 {
        self.capacity - self.free.len() as u32
    }

    /// Total capacity of the arena.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// True when no slot is allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.free.is_full()
    }

    /// True when no slot is free.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }
}

impl fmt::Debug for OrderArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderArena")
            .field("capacity", &self.capacity)
            .field("allocated", &self.allocated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Side;

    #[test]
    fn test_arena_creation() {
        let arena = OrderArena::new(100);
        assert_eq!(arena.capacity(), 100);
        assert_eq!(arena.allocated(), 0);
        assert!(arena.is_empty());
        assert!(!arena.is_full());
    }

    #[test]
    fn test_allocate_release_reuse() {
        let mut arena = OrderArena::new(3);

        let id0 = arena.allocate().unwrap();
        let id1 = arena.allocate().unwrap();
        let id2 = arena.allocate().unwrap();

        assert_eq!(arena.allocated(), 3);
        assert!(arena.is_full());
        assert_eq!(
            arena.allocate(),
            Err(BookError::ArenaExhausted { capacity: 3 })
        );

        arena.release(id1).unwrap();
        assert_eq!(arena.allocated(), 2);

        // LIFO: the freed slot comes straight back
        let id3 = arena.allocate().unwrap();
        assert_eq!(id3, id1);

        arena.release(id0).unwrap();
        arena.release(id2).unwrap();
        arena.release(id3).unwrap();
        assert!(arena.is_empty());
    }

    #[test]
    fn test_release_zeroes_record() {
        let mut arena = OrderArena::new(4);
        let id = arena.allocate().unwrap();

        let order = arena.get_mut(id);
        order.side = Side::Ask;
        order.size = 50;
        order.trader_id = 9;
        order.price = 101;
        order.next = Some(2);

        arena.release(id).unwrap();

        let order = arena.get(id);
        assert_eq!(order.size, 0);
        assert_eq!(order.trader_id, 0);
        assert_eq!(order.next, None);
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut arena = OrderArena::new(8);
        let id = arena.allocate().unwrap();

        let order = arena.get_mut(id);
        order.side = Side::Bid;
        order.size = 75;
        order.trader_id = 42;
        order.price = 10_050;
        order.symbol_id = 2;

        let order = arena.get(id);
        assert_eq!(order.side, Side::Bid);
        assert_eq!(order.size, 75);
        assert_eq!(order.trader_id, 42);
        assert_eq!(order.price, 10_050);
        assert_eq!(order.symbol_id, 2);
    }
}
