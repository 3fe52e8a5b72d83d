//! Nested scope timing for debug builds.
//!
//! Wrap regions of interest in a [`Measure`] guard (or the [`measure!`]
//! macro). When the outermost scope on a thread closes, an indented trace of
//! every nested scope is logged at `info` level:
//!
//! ```text
//! begin             render frame
//!   begin             layer "background"
//!   end      0.001203 layer "background"
//! end      0.000087 render frame (full time: 0.001290)
//! ```
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`measure`] | `Measure` guard, `measure!`, per-thread scope stack |
//! | [`clock`] | `Clock`, `MonotonicClock`, `ManualClock` |
//! | [`sink`] | `TraceSink`, `LogSink`, `CaptureSink` |
//! | [`logging`] | `env_logger` setup for host binaries |
//!
//! # Build configuration
//!
//! Timing is compiled in when `debug_assertions` is on or the
//! `force-enable` feature is set. Otherwise every entry point is a zero-cost
//! no-op with the same signature, so call sites need no `cfg`.
//!
//! # Threads
//!
//! Each thread has its own scope stack, clock, and sink. Guards cannot cross
//! threads.

pub mod clock;
pub mod logging;
pub mod measure;
pub mod sink;

pub use measure::{active_depth, is_enabled, set_clock, set_sink, Measure};
