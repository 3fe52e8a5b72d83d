//! Logging utilities.
//!
//! Scope traces are delivered through the standard `log` facade under the
//! [`TRACE_TARGET`] target. This module wires up `env_logger` so that those
//! records actually reach stderr in host binaries.

mod init;

pub use init::{init_logging, LoggingConfig};

/// Log target used for flushed scope traces.
pub const TRACE_TARGET: &str = "scopetrace";
