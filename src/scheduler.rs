//! Deferred actions and the virtual-time queue that fires them.

use std::time::Duration;

/// Work a timer carries until it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    HideToast,
    Navigate(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Capability to run an action later.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, action: Deferred) -> TimerId;

    /// Returns false if the timer already fired or was never scheduled here.
    fn cancel(&mut self, id: TimerId) -> bool;
}

#[derive(Debug, Clone)]
struct PendingTimer {
    id: TimerId,
    deadline: Duration,
    action: Deferred,
}

/// Timers keyed on a clock that only moves when told to.
///
/// Tests advance it by hand; the terminal host advances it to the page's
/// elapsed wall-clock time on every tick.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    pub fn advance(&mut self, by: Duration) -> Vec<Deferred> {
        self.advance_to(self.now + by)
    }

    /// Move the clock to `time` and return every action now due, ordered by
    /// deadline and then by the order they were scheduled in.
    pub fn advance_to(&mut self, time: Duration) -> Vec<Deferred> {
        self.now = self.now.max(time);

        let now = self.now;
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|t| t.deadline <= now);
        self.pending = rest;

        due.sort_by_key(|t| (t.deadline, t.id));
        due.into_iter().map(|t| t.action).collect()
    }

    /// Drop every pending timer without firing it.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration, action: Deferred) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            id,
            deadline: self.now + delay,
            action,
        });
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }
}
