//! Monotonic time abstraction and the non-blocking countdown timer.
//!
//! The controller never sleeps.  Every wait is a [`CountdownTimer`]
//! checked once per tick against an injected [`Clock`], so tests drive
//! time with a [`ManualClock`] instead of real delays.

use core::cell::Cell;

/// Monotonic millisecond time source.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin.  Never goes backwards.
    fn now_ms(&self) -> u64;
}

/// A frozen instant.  The controller samples its clock once per tick and
/// hands this snapshot to every handler so all decisions in one tick see
/// the same time.
impl Clock for u64 {
    fn now_ms(&self) -> u64 {
        *self
    }
}

/// Hand-advanced clock for tests and simulation.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get().saturating_add(delta_ms));
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Outcome of polling a [`CountdownTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    Ready,
    Waiting,
}

/// Restartable interval timer.
///
/// [`tick`](Self::tick) reports `Ready` at most once per elapsed period
/// and re-arms itself from the instant it fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountdownTimer {
    period_ms: u64,
    /// `None` while stopped.
    started_at: Option<u64>,
}

impl CountdownTimer {
    pub const fn new() -> Self {
        Self {
            period_ms: 0,
            started_at: None,
        }
    }

    /// Arm the timer; the first `Ready` comes `period_ms` from now.
    pub fn start(&mut self, period_ms: u32, clock: &impl Clock) {
        self.period_ms = u64::from(period_ms);
        self.started_at = Some(clock.now_ms());
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn tick(&mut self, clock: &impl Clock) -> TimerTick {
        let Some(started_at) = self.started_at else {
            return TimerTick::Waiting;
        };
        let now = clock.now_ms();
        if now.saturating_sub(started_at) >= self.period_ms {
            self.started_at = Some(now);
            TimerTick::Ready
        } else {
            TimerTick::Waiting
        }
    }
}
