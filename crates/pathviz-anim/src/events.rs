//! Timeline-ordered event queue.
//!
//! Events are stored in a min-heap keyed by `(due, insertion_order)`.
//! Earlier offsets are popped first; ties are broken by insertion order
//! (FIFO).

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

/// An entry in the event queue.
#[derive(Debug)]
struct Entry<E> {
    event: E,
    due: Duration,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Wrapped in Reverse for the BinaryHeap: earlier due first, then
        // earlier insertion.
        self.due.cmp(&other.due).then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A queue of events keyed by their offset from the start of a timeline.
///
/// Events due earlier are dequeued first. Among events due at the same
/// offset, those pushed earlier are dequeued first.
#[derive(Debug)]
pub struct EventQueue<E> {
    heap: BinaryHeap<Reverse<Entry<E>>>,
    seq: u64,
}

impl<E> EventQueue<E> {
    /// Create an empty event queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Push an event due at the given offset.
    pub fn push(&mut self, event: E, due: Duration) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { event, due, seq }));
    }

    /// Offset of the next event, if any.
    pub fn peek_due(&self) -> Option<Duration> {
        self.heap.peek().map(|Reverse(entry)| entry.due)
    }

    /// Pop the earliest event, also returning its offset.
    pub fn pop_with_due(&mut self) -> Option<(E, Duration)> {
        self.heap.pop().map(|Reverse(entry)| (entry.event, entry.due))
    }

    /// Pop the earliest event if it is due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(E, Duration)> {
        match self.peek_due() {
            Some(due) if due <= now => self.pop_with_due(),
            _ => None,
        }
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of events in the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Discard every pending event.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}
