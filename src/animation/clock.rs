//! Frame clock
//!
//! The render loop blocks on a [`FrameClock`] between frames. This is the
//! only place the animation suspends.

use std::thread;
use std::time::{Duration, Instant};

/// Source of tick boundaries
pub trait FrameClock {
    /// Block until the next tick boundary
    fn wait_for_tick(&mut self);
}

/// Fixed-period wall-clock ticker
///
/// Sleeps until the next deadline. When a frame overruns, missed ticks are
/// dropped and the schedule restarts from now, so a slow terminal never
/// triggers a burst of catch-up frames.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now() + period,
        }
    }
}

impl FrameClock for Ticker {
    fn wait_for_tick(&mut self) {
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
        }

        self.next += self.period;
        let now = Instant::now();
        if self.next <= now {
            self.next = now + self.period;
        }
    }
}
