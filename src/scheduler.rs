//! Time-ordered queue of scheduled session events.
//!
//! Every delayed emission is an explicit `(fire_at, event)` entry rather
//! than an ambient runtime timer. Events pop strictly in wall-clock order
//! of their fire times, so delayed output from overlapping commands
//! interleaves by completion time, not by submission order. Entries
//! scheduled for the same instant pop in scheduling order (a monotonic
//! sequence number breaks the tie), which keeps replays deterministic.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use crate::services::time_source::SharedTimeSource;

struct Entry<E> {
    fire_at: Instant,
    seq: u64,
    event: E,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at == other.fire_at && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fire_at
            .cmp(&other.fire_at)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Min-heap of pending events, driven by a [`TimeSource`].
///
/// The queue is owned by the session; dropping the session drops every
/// pending entry, so a leftover timer can never touch dead state.
///
/// [`TimeSource`]: crate::services::time_source::TimeSource
pub struct Scheduler<E> {
    queue: BinaryHeap<Reverse<Entry<E>>>,
    next_seq: u64,
    time: SharedTimeSource,
}

impl<E> Scheduler<E> {
    pub fn new(time: SharedTimeSource) -> Self {
        Self {
            queue: BinaryHeap::new(),
            next_seq: 0,
            time,
        }
    }

    /// Schedule `event` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, event: E) {
        let entry = Entry {
            fire_at: self.time.now() + delay,
            seq: self.next_seq,
            event,
        };
        self.next_seq += 1;
        self.queue.push(Reverse(entry));
    }

    /// Pop the next event whose fire time has been reached, if any.
    ///
    /// Call in a loop to drain everything due at the current instant.
    pub fn pop_due(&mut self) -> Option<E> {
        let now = self.time.now();
        if self.queue.peek().is_some_and(|Reverse(e)| e.fire_at <= now) {
            return self.queue.pop().map(|Reverse(e)| e.event);
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
