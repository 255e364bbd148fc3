//! Deferred work: timer identities, the scheduler seam, and a virtual clock.
//!
//! The core never sleeps. It asks for a [`Timer`] to be scheduled and expects
//! the host to hand it back through [`crate::site::SiteCore::on_timer`] once
//! the delay has elapsed. In the browser that is a `gloo-timers` timeout; in
//! tests it is [`ManualScheduler`], which fires only when told to.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// A unit of deferred work owned by the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timer {
    /// One scripted chat reply is due.
    BotReply,
}

/// Something that can run a [`Timer`] after a delay.
pub trait Scheduler {
    fn schedule(&mut self, delay_ms: u32, timer: Timer);
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    due_ms: u64,
    seq: u64,
    timer: Timer,
}

/// Virtual-clock scheduler. Time only moves on [`ManualScheduler::advance`].
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<Pending>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers that have not fired yet.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward and return every timer that came due.
    ///
    /// Timers fire in due-time order; timers due at the same instant fire in
    /// the order they were scheduled.
    pub fn advance(&mut self, ms: u64) -> Vec<Timer> {
        self.now_ms += ms;
        let now = self.now_ms;

        let (mut due, rest): (Vec<Pending>, Vec<Pending>) = self.pending.drain(..).partition(|p| p.due_ms <= now);
        self.pending = rest;

        due.sort_by_key(|p| (p.due_ms, p.seq));
        due.into_iter().map(|p| p.timer).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay_ms: u32, timer: Timer) {
        let pending = Pending { due_ms: self.now_ms + u64::from(delay_ms), seq: self.next_seq, timer };
        self.next_seq += 1;
        self.pending.push(pending);
    }
}
