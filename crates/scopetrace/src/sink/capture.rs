use std::cell::RefCell;
use std::rc::Rc;

use super::TraceSink;

/// Sink that keeps every trace in memory.
///
/// Clones share storage: install one handle with
/// [`set_sink`](crate::set_sink) and read back through another.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    traces: Rc<RefCell<Vec<String>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the traces received so far.
    pub fn traces(&self) -> Vec<String> {
        self.traces.borrow().clone()
    }

    /// Drains and returns the traces received so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.traces.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.traces.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.borrow().is_empty()
    }
}

impl TraceSink for CaptureSink {
    fn emit(&self, trace: &str) {
        self.traces.borrow_mut().push(trace.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let sink = CaptureSink::new();
        let handle = sink.clone();
        sink.emit("one");
        sink.emit("two");
        assert_eq!(handle.traces(), vec!["one", "two"]);
        assert_eq!(handle.len(), 2);
    }

    #[test]
    fn take_drains() {
        let sink = CaptureSink::new();
        sink.emit("one");
        assert_eq!(sink.take(), vec!["one"]);
        assert!(sink.is_empty());
    }
}
