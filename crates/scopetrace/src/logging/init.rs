use std::sync::Once;

use super::TRACE_TARGET;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "scopetrace=info,my_app=debug").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,

    /// Prefix records with a timestamp.
    pub timestamps: bool,

    /// Keep scope traces visible even when the filter is stricter than `info`.
    ///
    /// Only applies when the filter has no directive for the trace target, so
    /// `scopetrace=off` still silences traces.
    pub always_show_traces: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
            always_show_traces: true,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored. If another
/// logger was installed first, that logger is kept.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        let filter = config
            .env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok());

        match &filter {
            Some(filter) => {
                builder.parse_filters(filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        let names_target = filter.as_deref().is_some_and(names_trace_target);
        if config.always_show_traces && !names_target {
            builder.filter_module(TRACE_TARGET, log::LevelFilter::Info);
        }

        if !config.timestamps {
            builder.format_timestamp(None);
        }

        builder.write_style(config.write_style);

        match builder.try_init() {
            Ok(()) => log::debug!("logging initialized"),
            Err(e) => log::debug!("logger already installed: {e}"),
        }
    });
}

/// Whether an `env_logger` filter string has a directive for [`TRACE_TARGET`]
/// or one of its submodules.
fn names_trace_target(filter: &str) -> bool {
    let directives = filter.split('/').next().unwrap_or_default();
    directives.split(',').any(|directive| {
        let module = directive.split('=').next().unwrap_or_default().trim();
        module == TRACE_TARGET
            || module
                .strip_prefix(TRACE_TARGET)
                .is_some_and(|rest| rest.starts_with("::"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_target_directive_is_detected() {
        assert!(names_trace_target("scopetrace=off"));
        assert!(names_trace_target("warn, scopetrace=warn"));
        assert!(names_trace_target("scopetrace::measure=debug/frame"));
        assert!(names_trace_target("scopetrace"));
    }

    #[test]
    fn unrelated_filters_leave_trace_target_alone() {
        assert!(!names_trace_target("warn"));
        assert!(!names_trace_target("my_app=debug,wgpu=warn"));
        assert!(!names_trace_target("scopetrace_studio=debug"));
        assert!(!names_trace_target("info/scopetrace"));
    }

    #[test]
    fn default_keeps_traces_visible() {
        let config = LoggingConfig::default();
        assert!(config.env_filter.is_none());
        assert!(config.always_show_traces);
        assert!(config.timestamps);
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig {
            env_filter: Some("warn".into()),
            ..LoggingConfig::default()
        });
    }
}
