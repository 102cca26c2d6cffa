//! Min-priority queue keyed by `f64` cost.
//!
//! Entries are stored in a heap keyed by `(cost, insertion_order)`. Lower
//! costs are popped first; equal costs pop in insertion order (FIFO).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<T> {
    item: T,
    cost: f64,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Wrapped in Reverse for the heap: smaller cost first, then smaller seq.
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A priority frontier for best-first searches.
pub(crate) struct Frontier<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T> Frontier<T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Insert `item` with priority `cost`.
    pub fn push(&mut self, item: T, cost: f64) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { item, cost, seq }));
    }

    /// Remove the cheapest item (ties broken FIFO).
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }

}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_cheapest_first() {
        let mut q = Frontier::new();
        q.push("a", 3.5);
        q.push("b", 0.5);
        q.push("c", 2.0);

        assert_eq!(q.pop(), Some("b"));
        assert_eq!(q.pop(), Some("c"));
        assert_eq!(q.pop(), Some("a"));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn equal_costs_are_fifo() {
        let mut q = Frontier::new();
        q.push("first", 1.0);
        q.push("second", 1.0);
        q.push("cheap", 0.0);
        q.push("third", 1.0);

        assert_eq!(q.pop(), Some("cheap"));
        assert_eq!(q.pop(), Some("first"));
        assert_eq!(q.pop(), Some("second"));
        assert_eq!(q.pop(), Some("third"));
    }

    #[test]
    fn drains_to_none() {
        let mut q = Frontier::<u32>::default();
        assert_eq!(q.pop(), None);
        q.push(7, 4.25);
        assert_eq!(q.pop(), Some(7));
        assert_eq!(q.pop(), None);
    }
}
