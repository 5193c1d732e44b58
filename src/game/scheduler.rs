//! Delayed continuations tagged with the round they belong to

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

/// Identity of a built round; bumped every time the board is rebuilt
pub type RoundId = u64;

/// Work to run once its delay has passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Continuation {
    /// Eliminate a matched pair
    Eliminate { first: usize, second: usize },
    /// Flag a mismatched pair
    FlagMismatch { first: usize, second: usize },
    /// Return a mismatched pair to idle
    Revert { first: usize, second: usize },
    /// Tell the boundary the round was cleared
    AnnounceComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    due: Duration,
    seq: u64,
    round: RoundId,
    action: Continuation,
}

/// A continuation that came due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Due {
    pub at: Duration,
    pub round: RoundId,
    pub action: Continuation,
}

/// Time-ordered queue of continuations
///
/// Entries due at the same instant fire in scheduling order.
#[derive(Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Duration, round: RoundId, action: Continuation) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Entry {
            due,
            seq,
            round,
            action,
        }));
    }

    /// Due time of the earliest pending continuation
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(entry)| entry.due)
    }

    /// Remove and return the earliest continuation due at or before `now`
    pub fn pop_due(&mut self, now: Duration) -> Option<Due> {
        if self.next_due()? > now {
            return None;
        }
        self.queue.pop().map(|Reverse(entry)| Due {
            at: entry.due,
            round: entry.round,
            action: entry.action,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop every pending continuation
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn pops_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(500), 1, Continuation::AnnounceComplete);
        scheduler.schedule(ms(200), 1, Continuation::Eliminate { first: 0, second: 1 });

        assert_eq!(scheduler.next_due(), Some(ms(200)));
        assert!(scheduler.pop_due(ms(100)).is_none());

        let first = scheduler.pop_due(ms(1000)).unwrap();
        assert_eq!(first.action, Continuation::Eliminate { first: 0, second: 1 });
        let second = scheduler.pop_due(ms(1000)).unwrap();
        assert_eq!(second.action, Continuation::AnnounceComplete);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn same_instant_keeps_schedule_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(200), 1, Continuation::Revert { first: 4, second: 5 });
        scheduler.schedule(ms(200), 1, Continuation::Eliminate { first: 0, second: 1 });

        assert_eq!(
            scheduler.pop_due(ms(200)).unwrap().action,
            Continuation::Revert { first: 4, second: 5 }
        );
    }

    #[test]
    fn clear_drops_everything() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(1), 1, Continuation::AnnounceComplete);
        scheduler.schedule(ms(2), 2, Continuation::AnnounceComplete);
        assert_eq!(scheduler.len(), 2);
        scheduler.clear();
        assert_eq!(scheduler.next_due(), None);
    }
}
