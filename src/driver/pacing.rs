//! Frame pacing for the game loop

use std::time::{Duration, Instant};

/// How the loop waits between iterations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep until the next tick boundary at this many ticks per second
    FixedRate(u32),
    /// Never wait; the input source blocks until something happens
    Unpaced,
}

/// Deadline tracker for fixed-rate loops
#[derive(Debug)]
pub(crate) struct Ticker {
    period: Option<Duration>,
    next: Instant,
}

impl Ticker {
    pub(crate) fn new(pacing: Pacing) -> Self {
        let period = match pacing {
            Pacing::FixedRate(hz) if hz > 0 => Some(Duration::from_secs(1) / hz),
            Pacing::FixedRate(_) | Pacing::Unpaced => None,
        };
        Self {
            period,
            next: Instant::now(),
        }
    }

    /// Block until the next tick boundary.
    ///
    /// A frame that overran its slot re-anchors the schedule at "now" instead
    /// of running a burst of catch-up ticks.
    pub(crate) fn wait(&mut self) {
        let Some(period) = self.period else {
            return;
        };
        self.next += period;
        let now = Instant::now();
        if self.next > now {
            std::thread::sleep(self.next - now);
        } else {
            log::trace!("Frame overran by {:?}", now - self.next);
            self.next = now;
        }
    }
}
