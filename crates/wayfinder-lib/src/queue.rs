//! Bounded min-priority queue backing the shortest-path engine.
//!
//! The queue is sized once for a single traversal. Pushing past that bound is
//! an error rather than a silent drop, so a traversal can never lose a
//! relaxation.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use thiserror::Error;

use crate::graph::LocationId;

/// Failures raised by [`MinQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The queue already holds `capacity` entries.
    #[error("priority queue is full (capacity {capacity})")]
    Full { capacity: usize },

    /// No entries remain.
    #[error("priority queue is empty")]
    Empty,
}

/// Min-heap of `(location, cumulative cost)` pairs with a fixed capacity.
///
/// Entries sharing a cost come out in an unspecified order.
#[derive(Debug, Clone)]
pub struct MinQueue {
    heap: BinaryHeap<QueueEntry>,
    capacity: usize,
}

impl MinQueue {
    /// Create a queue that accepts at most `capacity` simultaneous entries.
    ///
    /// Storage is reserved up front, so allocator exhaustion is reported
    /// here instead of aborting mid-traversal.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, std::collections::TryReserveError> {
        let mut heap = BinaryHeap::new();
        heap.try_reserve_exact(capacity)?;
        Ok(Self { heap, capacity })
    }

    /// Insert an entry, failing when the queue is at capacity.
    pub fn push(&mut self, location: LocationId, cost: u64) -> Result<(), QueueError> {
        if self.heap.len() >= self.capacity {
            return Err(QueueError::Full {
                capacity: self.capacity,
            });
        }
        self.heap.push(QueueEntry { location, cost });
        Ok(())
    }

    /// Remove and return the lowest-cost entry.
    pub fn pop_min(&mut self) -> Result<(LocationId, u64), QueueError> {
        self.heap
            .pop()
            .map(|entry| (entry.location, entry.cost))
            .ok_or(QueueError::Empty)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    location: LocationId,
    cost: u64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.location.cmp(&self.location))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
