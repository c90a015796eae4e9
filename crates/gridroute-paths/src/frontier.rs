//! Search frontiers: a FIFO queue and a min-priority queue.
//!
//! [`PriorityFrontier`] is a min-heap keyed by `(priority, insertion_order)`.
//! Lower priorities are popped first; ties are broken by insertion order
//! (FIFO), so results are deterministic for a given input.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::Algorithm;

#[derive(Debug)]
struct Entry<T> {
    item: T,
    priority: i32,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
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
        // Natural order; the heap wraps entries in `Reverse`.
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue with FIFO tie-breaking.
#[derive(Debug)]
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Insert `item` with the given priority.
    pub fn push(&mut self, item: T, priority: i32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            item,
            priority,
            seq,
        }));
    }

    /// Remove the item with the lowest priority (ties broken FIFO).
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The open list of a search: arrival-ordered for breadth-first search,
/// priority-ordered for the cost-aware searches.
#[derive(Debug)]
pub enum Frontier<T> {
    Fifo(VecDeque<T>),
    Priority(PriorityFrontier<T>),
}

impl<T> Frontier<T> {
    /// The frontier kind `algorithm` expands from.
    pub fn for_algorithm(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::BreadthFirst => Frontier::Fifo(VecDeque::new()),
            _ => Frontier::Priority(PriorityFrontier::new()),
        }
    }

    /// Insert `item`. A FIFO frontier ignores `priority`.
    pub fn push(&mut self, item: T, priority: i32) {
        match self {
            Frontier::Fifo(q) => q.push_back(item),
            Frontier::Priority(q) => q.push(item, priority),
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        match self {
            Frontier::Fifo(q) => q.pop_front(),
            Frontier::Priority(q) => q.pop(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Frontier::Fifo(q) => q.is_empty(),
            Frontier::Priority(q) => q.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Fifo(q) => q.len(),
            Frontier::Priority(q) => q.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_first() {
        let mut q = PriorityFrontier::new();
        q.push("a", 3);
        q.push("b", 1);
        q.push("c", 2);

        assert_eq!(q.pop(), Some("b"));
        assert_eq!(q.pop(), Some("c"));
        assert_eq!(q.pop(), Some("a"));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn ties_break_in_insertion_order() {
        let mut q = PriorityFrontier::new();
        q.push("first", 1);
        q.push("second", 1);
        q.push("zero", 0);
        q.push("third", 1);

        assert_eq!(q.pop(), Some("zero"));
        assert_eq!(q.pop(), Some("first"));
        assert_eq!(q.pop(), Some("second"));
        assert_eq!(q.pop(), Some("third"));
    }

    #[test]
    fn fifo_frontier_ignores_priority() {
        let mut f = Frontier::for_algorithm(Algorithm::BreadthFirst);
        f.push(1, 9);
        f.push(2, 0);
        f.push(3, 5);
        assert_eq!(f.len(), 3);
        assert_eq!(f.pop(), Some(1));
        assert_eq!(f.pop(), Some(2));
        assert_eq!(f.pop(), Some(3));
        assert!(f.is_empty());
    }

    #[test]
    fn cost_aware_algorithms_use_priority_frontier() {
        for algo in [Algorithm::UniformCost, Algorithm::AStar, Algorithm::AStarReplan] {
            let mut f = Frontier::for_algorithm(algo);
            assert!(matches!(f, Frontier::Priority(_)));
            f.push('x', 2);
            f.push('y', 1);
            assert_eq!(f.pop(), Some('y'));
        }
    }
}
