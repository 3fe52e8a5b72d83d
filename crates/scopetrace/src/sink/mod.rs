//! Destinations for completed scope traces.
//!
//! A trace is handed to the sink exactly once, when the outermost timed scope
//! on a thread closes. The string starts with a newline and holds one line per
//! visible `begin`/`end` event.

mod capture;

pub use capture::CaptureSink;

use crate::logging::TRACE_TARGET;

/// Receiver of flushed traces.
pub trait TraceSink {
    fn emit(&self, trace: &str);
}

/// Default sink: forwards each trace to `log::info!` under [`TRACE_TARGET`].
#[derive(Debug, Copy, Clone, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn emit(&self, trace: &str) {
        log::info!(target: TRACE_TARGET, "{trace}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_sink_without_logger_is_silent() {
        LogSink.emit("\nbegin             A\n");
    }
}
