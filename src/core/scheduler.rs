//! Single-writer timer queue.
//!
//! Deferred combat steps and periodic ticks are messages with a due time.
//! The engine pops whatever is due, in due-time order (ties in scheduling
//! order), and each handler re-checks its own preconditions. Nothing is
//! ever cancelled.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Work the engine does when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    /// Enemy strikes back after the player's swing.
    EnemyCounterAttack,
    /// Replace the enemy after a victory or defeat.
    RespawnEnemy,
    /// Cooldown countdown and play-time accumulation.
    SecondTick,
    /// Rebirth eligibility and achievement re-check.
    ReadinessCheck,
    Autosave,
}

impl TimerEvent {
    /// Interval for events that reschedule themselves.
    pub fn period_ms(&self) -> Option<u64> {
        use crate::core::constants::*;
        match self {
            TimerEvent::SecondTick => Some(SECOND_TICK_MS),
            TimerEvent::ReadinessCheck => Some(READINESS_CHECK_INTERVAL_MS),
            TimerEvent::Autosave => Some(AUTOSAVE_INTERVAL_MS),
            TimerEvent::EnemyCounterAttack | TimerEvent::RespawnEnemy => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Scheduled {
    due_ms: u64,
    seq: u64,
    event: TimerEvent,
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due_ms, self.seq).cmp(&(other.due_ms, other.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of pending timers keyed by `(due_ms, seq)`.
#[derive(Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Reverse<Scheduled>>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `event` to fire at `due_ms`.
    pub fn schedule_at(&mut self, due_ms: u64, event: TimerEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Scheduled { due_ms, seq, event }));
    }

    /// Removes and returns the earliest event due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(u64, TimerEvent)> {
        let Reverse(next) = self.queue.peek()?;
        if next.due_ms > now_ms {
            return None;
        }
        self.queue.pop().map(|Reverse(s)| (s.due_ms, s.event))
    }

    /// Due time of the earliest pending event.
    pub fn next_due(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse(s)| s.due_ms)
    }

    pub fn pending(&self, event: TimerEvent) -> usize {
        self.queue.iter().filter(|Reverse(s)| s.event == event).count()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_at(3_000, TimerEvent::RespawnEnemy);
        scheduler.schedule_at(1_000, TimerEvent::EnemyCounterAttack);
        scheduler.schedule_at(2_000, TimerEvent::SecondTick);

        assert_eq!(scheduler.next_due(), Some(1_000));
        assert_eq!(scheduler.pop_due(500), None);
        assert_eq!(
            scheduler.pop_due(5_000),
            Some((1_000, TimerEvent::EnemyCounterAttack))
        );
        assert_eq!(scheduler.pop_due(5_000), Some((2_000, TimerEvent::SecondTick)));
        assert_eq!(scheduler.pop_due(5_000), Some((3_000, TimerEvent::RespawnEnemy)));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_ties_keep_scheduling_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_at(1_000, TimerEvent::Autosave);
        scheduler.schedule_at(1_000, TimerEvent::EnemyCounterAttack);
        scheduler.schedule_at(1_000, TimerEvent::SecondTick);

        let order: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(1_000))
            .map(|(_, e)| e)
            .collect();
        assert_eq!(
            order,
            vec![
                TimerEvent::Autosave,
                TimerEvent::EnemyCounterAttack,
                TimerEvent::SecondTick
            ]
        );
    }

    #[test]
    fn test_periods() {
        assert_eq!(TimerEvent::SecondTick.period_ms(), Some(1_000));
        assert_eq!(TimerEvent::ReadinessCheck.period_ms(), Some(5_000));
        assert_eq!(TimerEvent::Autosave.period_ms(), Some(15_000));
        assert_eq!(TimerEvent::RespawnEnemy.period_ms(), None);
    }

    #[test]
    fn test_pending_counts_by_kind() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_at(1_000, TimerEvent::EnemyCounterAttack);
        scheduler.schedule_at(1_200, TimerEvent::EnemyCounterAttack);
        scheduler.schedule_at(2_000, TimerEvent::RespawnEnemy);
        assert_eq!(scheduler.pending(TimerEvent::EnemyCounterAttack), 2);
        assert_eq!(scheduler.len(), 3);
    }
}
