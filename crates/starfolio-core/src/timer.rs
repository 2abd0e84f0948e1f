//! Cancellable repeating timer and leading-edge throttle.
//!
//! Both are passive: they hold deadlines and are polled with the current
//! time. The host event loop decides when to poll.

use std::time::Duration;

/// A repeating timer with explicit start/cancel.
///
/// `start` always schedules a full interval from `now`; there is no
/// resume of previously elapsed time. `cancel` on an unarmed timer is a
/// no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatingTimer {
    interval: Duration,
    deadline: Option<Duration>,
}

impl RepeatingTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arm (or re-arm) the timer for `now + interval`.
    pub fn start(&mut self, now: Duration) {
        self.deadline = Some(now + self.interval);
    }

    /// Disarm the timer. Idempotent.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Next due time, if armed.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Fire if due at `now`, re-arming a full interval from `now`.
    ///
    /// Missed periods are merged into a single firing. Returns `false`
    /// when unarmed or not yet due.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

/// Leading-edge throttle.
///
/// The first call executes immediately; later calls are dropped until
/// `window` has elapsed since the last *executed* call. A dropped call is
/// never replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Throttle {
    window: Duration,
    last_run: Option<Duration>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_run: None,
        }
    }

    /// Whether a call at `now` would execute.
    pub fn ready(&self, now: Duration) -> bool {
        match self.last_run {
            Some(last) => now.saturating_sub(last) >= self.window,
            None => true,
        }
    }

    /// Record an execution at `now` if the window allows it.
    pub fn try_acquire(&mut self, now: Duration) -> bool {
        if !self.ready(now) {
            return false;
        }
        self.last_run = Some(now);
        true
    }

    /// Execute `f` if the window allows it.
    pub fn run<R>(&mut self, now: Duration, f: impl FnOnce() -> R) -> Option<R> {
        self.try_acquire(now).then(f)
    }
}
