//! Clock sources for scope timing.
//!
//! A [`Clock`] yields monotonic readings as a [`Duration`] since an arbitrary,
//! per-clock epoch. Only differences between two readings of the same clock
//! are meaningful.
//!
//! - [`MonotonicClock`] is the default and wraps `std::time::Instant`.
//! - [`ManualClock`] is advanced by hand; tests use it to get exact traces.

mod manual;
mod monotonic;

use std::time::Duration;

pub use manual::ManualClock;
pub use monotonic::MonotonicClock;

/// Monotonic time source.
pub trait Clock {
    /// Current reading. Must never go backwards within one clock instance.
    fn now(&self) -> Duration;
}
