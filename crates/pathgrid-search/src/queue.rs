//! Min-priority queue with FIFO tie-breaking.
//!
//! Elements are stored in a binary heap keyed by `(priority, insertion
//! order)`. Lower priorities are dequeued first; among equal priorities the
//! element enqueued earliest wins. Expansion order decides which of several
//! equally short paths a search returns, so the tie-break is part of the
//! contract.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::SearchError;

#[derive(Debug)]
struct Entry<T> {
    element: T,
    priority: f64,
    /// Monotonically increasing; lower = enqueued earlier.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural order; the heap holds `Reverse<Entry>` to pop the smallest.
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue.
///
/// The same element may be enqueued several times with different
/// priorities; each copy is an independent entry.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Insert `element` with the given priority.
    pub fn enqueue(&mut self, element: T, priority: f64) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            element,
            priority,
            seq,
        }));
    }

    /// Remove and return the element with the lowest priority (ties broken
    /// FIFO).
    ///
    /// Fails with [`SearchError::EmptyQueue`] when nothing is queued.
    pub fn dequeue(&mut self) -> Result<T, SearchError> {
        self.dequeue_with_priority().map(|(element, _)| element)
    }

    /// Like [`dequeue`](Self::dequeue), also returning the priority.
    pub fn dequeue_with_priority(&mut self) -> Result<(T, f64), SearchError> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.element, entry.priority))
            .ok_or(SearchError::EmptyQueue)
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries, duplicates included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
