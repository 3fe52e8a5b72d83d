//! Nested scope timer.
//!
//! A [`Measure`] is an RAII guard. Creating one opens a timed scope on the
//! current thread; dropping it closes the scope. Scopes nest: time spent in a
//! child is charged to its parent, and when the outermost scope closes the
//! whole indented trace is handed to the thread's [`TraceSink`] in one piece:
//!
//! ```text
//! begin             frame
//!   begin             layer
//!   end      0.004100 layer
//! end      0.000900 frame (full time: 0.005000)
//! ```
//!
//! The `end` column is self time (time not spent in timed children). When a
//! scope had timed children its full time is appended in parentheses.
//!
//! The timer only exists in builds with `debug_assertions` or the
//! `force-enable` feature. Otherwise `Measure` is a zero-sized no-op with the
//! same API and [`measure!`](crate::measure) expands to nothing.
//!
//! [`TraceSink`]: crate::sink::TraceSink

#[cfg(any(debug_assertions, feature = "force-enable"))]
mod enabled;
#[cfg(any(debug_assertions, feature = "force-enable"))]
mod state;

#[cfg(not(any(debug_assertions, feature = "force-enable")))]
mod disabled;

#[cfg(any(debug_assertions, feature = "force-enable"))]
pub use enabled::{active_depth, set_clock, set_sink, Measure};

#[cfg(not(any(debug_assertions, feature = "force-enable")))]
pub use disabled::{active_depth, set_clock, set_sink, Measure};

/// Whether scope timing is compiled into this build.
#[inline]
pub const fn is_enabled() -> bool {
    cfg!(any(debug_assertions, feature = "force-enable"))
}

/// Opens a timed scope that lasts until the end of the enclosing block.
///
/// ```
/// fn render() {
///     scopetrace::measure!("render");
///     // ...
/// }
/// ```
///
/// A second argument sets the hide-descendants flag:
/// `measure!("blur", true)` prints the blur scope but none of the scopes it
/// opens.
#[cfg(any(debug_assertions, feature = "force-enable"))]
#[macro_export]
macro_rules! measure {
    ($name:expr) => {
        let _measure_guard = $crate::Measure::new($name);
    };
    ($name:expr, $hide_subs:expr) => {
        let _measure_guard = $crate::Measure::with_options($name, $hide_subs);
    };
}

/// Opens a timed scope that lasts until the end of the enclosing block.
///
/// Timing is compiled out of this build. Arguments are referenced inside a
/// closure that is never called, so they are not evaluated.
#[cfg(not(any(debug_assertions, feature = "force-enable")))]
#[macro_export]
macro_rules! measure {
    ($name:expr $(, $hide_subs:expr)?) => {
        let _ = || {
            let _ = &$name;
            $(let _ = &$hide_subs;)?
        };
    };
}
