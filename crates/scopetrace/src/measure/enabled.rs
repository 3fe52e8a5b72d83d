use std::borrow::Cow;
use std::marker::PhantomData;
use std::rc::Rc;
use std::time::Duration;

use super::state::{Frame, STATE};
use crate::clock::Clock;
use crate::sink::TraceSink;

/// Marker after the indentation of a `begin` line. Padded so the scope name
/// lines up with the name column of `end` lines.
const BEGIN_MARKER: &str = "begin             ";

/// Timed scope guard.
///
/// Lives on the caller's stack; the thread-local scope stack only holds plain
/// data, so moving the guard is fine. Guards must be dropped in reverse
/// creation order, which normal block scoping guarantees. The guard is
/// neither `Send` nor `Sync`: it belongs to the thread that created it.
#[must_use = "the scope closes as soon as the guard is dropped"]
pub struct Measure {
    name: Cow<'static, str>,
    depth: usize,
    hide: bool,
    start: Duration,
    /// False when thread-local state was unavailable (thread teardown).
    armed: bool,
    _thread_bound: PhantomData<*const ()>,
}

impl Measure {
    /// Opens a scope named `name`.
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self::with_options(name, false)
    }

    /// Opens a scope whose descendants are timed but not printed.
    #[inline]
    pub fn with_hidden_subs(name: impl Into<Cow<'static, str>>) -> Self {
        Self::with_options(name, true)
    }

    /// Opens a scope, optionally hiding every scope nested inside it.
    ///
    /// A scope is itself hidden when its parent hides descendants, and it then
    /// hides its own descendants too.
    pub fn with_options(name: impl Into<Cow<'static, str>>, hide_subs: bool) -> Self {
        let name = name.into();

        let opened = STATE.try_with(|cell| {
            let mut guard = cell.borrow_mut();
            let st = &mut *guard;
            let depth = st.stack.len();
            let hide = st.stack.last().is_some_and(|top| top.hide_subs);

            if !hide {
                let line = begin_line(depth, &name);
                st.text.push_str(&line);
            }

            st.stack.push(Frame {
                hide_subs: hide_subs || hide,
                subs: Duration::ZERO,
            });

            let start = st.clock.now();
            (depth, hide, start)
        });

        match opened {
            Ok((depth, hide, start)) => Self {
                name,
                depth,
                hide,
                start,
                armed: true,
                _thread_bound: PhantomData,
            },
            Err(_) => Self {
                name,
                depth: 0,
                hide: true,
                start: Duration::ZERO,
                armed: false,
                _thread_bound: PhantomData,
            },
        }
    }

    /// Display name printed on this scope's `begin`/`end` lines.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nesting depth of this scope (0 for a top-level scope).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether this scope's lines are suppressed by an ancestor.
    pub fn is_hidden(&self) -> bool {
        self.hide
    }
}

impl Drop for Measure {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let flushed = STATE.try_with(|cell| {
            let mut guard = cell.borrow_mut();
            let st = &mut *guard;
            let elapsed = st.clock.now().saturating_sub(self.start);

            // Out-of-order drops leave the trace wrong but the stack consistent:
            // frames opened after this one are discarded with it, and a scope
            // whose frame is already gone just returns.
            let expected = self.depth + 1;
            if st.stack.len() < expected {
                log::warn!("timed scope `{}` closed after an enclosing scope", self.name);
                return None;
            }
            if st.stack.len() > expected {
                log::warn!(
                    "timed scope `{}` closed before {} nested scope(s)",
                    self.name,
                    st.stack.len() - expected
                );
                st.stack.truncate(expected);
            }

            let frame = st.stack.pop()?;

            if !self.hide {
                let line = end_line(self.depth, &self.name, elapsed, frame.subs);
                st.text.push_str(&line);
            }

            match st.stack.last_mut() {
                Some(parent) => {
                    parent.subs = parent.subs.saturating_add(elapsed);
                    None
                }
                None => {
                    let mut trace = String::with_capacity(st.text.len() + 1);
                    trace.push('\n');
                    trace.push_str(&st.text);
                    st.text.clear();
                    Some((trace, Rc::clone(&st.sink)))
                }
            }
        });

        // The borrow is released here, so the sink may open scopes itself.
        if let Ok(Some((trace, sink))) = flushed {
            sink.emit(&trace);
        }
    }
}

/// Number of timed scopes currently open on this thread.
pub fn active_depth() -> usize {
    STATE.try_with(|cell| cell.borrow().stack.len()).unwrap_or(0)
}

/// Replaces the clock used by this thread's timed scopes.
///
/// Ignored (with a warning) while scopes are open, since their start times
/// were read from the current clock.
pub fn set_clock(clock: impl Clock + 'static) {
    let _ = STATE.try_with(|cell| {
        let mut st = cell.borrow_mut();
        if !st.stack.is_empty() {
            log::warn!("clock not replaced: {} timed scope(s) still open", st.stack.len());
            return;
        }
        st.clock = Rc::new(clock);
    });
}

/// Replaces the sink that receives this thread's traces.
pub fn set_sink(sink: impl TraceSink + 'static) {
    let _ = STATE.try_with(|cell| {
        cell.borrow_mut().sink = Rc::new(sink);
    });
}

fn begin_line(depth: usize, name: &str) -> String {
    format!("{}{BEGIN_MARKER}{name}\n", indent(depth))
}

/// Formats an `end` line. A nonzero `subs` switches the timing column to self
/// time and appends the full time.
fn end_line(depth: usize, name: &str, elapsed: Duration, subs: Duration) -> String {
    let indent = indent(depth);
    if subs.is_zero() {
        format!("{indent}end {:13.6} {name}\n", elapsed.as_secs_f64())
    } else {
        let own = elapsed.saturating_sub(subs);
        format!(
            "{indent}end {:13.6} {name} (full time: {:.6})\n",
            own.as_secs_f64(),
            elapsed.as_secs_f64()
        )
    }
}

fn indent(depth: usize) -> String {
    " ".repeat(depth * 2)
}
