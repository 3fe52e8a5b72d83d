use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::Clock;

/// Hand-driven clock.
///
/// Clones share the same reading, so a test can install one handle as the
/// thread's clock and keep another to move time forward.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Creates a clock reading zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `dt`.
    pub fn advance(&self, dt: Duration) {
        self.now.set(self.now.get().saturating_add(dt));
    }

    /// Sets the reading. Going backwards is a caller bug.
    pub fn set(&self, now: Duration) {
        debug_assert!(now >= self.now.get(), "ManualClock must stay monotonic");
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Duration {
        self.now.get()
    }
}
