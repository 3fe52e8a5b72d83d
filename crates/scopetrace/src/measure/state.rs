use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::clock::{Clock, MonotonicClock};
use crate::sink::{LogSink, TraceSink};

/// One open scope on the thread's stack.
#[derive(Debug, Copy, Clone)]
pub(super) struct Frame {
    /// Scopes opened inside this one are hidden.
    pub hide_subs: bool,
    /// Elapsed time of already closed child scopes.
    pub subs: Duration,
}

/// Per-thread timer state. Empty at first use; drains itself after every
/// top-level scope, so it never needs teardown.
pub(super) struct TraceState {
    pub stack: Vec<Frame>,
    pub text: String,
    pub clock: Rc<dyn Clock>,
    pub sink: Rc<dyn TraceSink>,
}

impl TraceState {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            text: String::new(),
            clock: Rc::new(MonotonicClock::new()),
            sink: Rc::new(LogSink),
        }
    }
}

thread_local! {
    pub(super) static STATE: RefCell<TraceState> = RefCell::new(TraceState::new());
}
