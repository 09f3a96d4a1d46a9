use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with environment-based filtering
///
/// - Uses `RUST_LOG` for level filtering (defaults to "info" if not set)
/// - Writes to stderr; stdout is reserved for the report
/// - JSON with flattened event fields when `force_json` is set or stderr
///   is not a terminal
pub fn init_logging(force_json: bool) {
    init_logging_with(log_mode(force_json));
}

pub fn log_mode(force_json: bool) -> LogMode {
    if force_json {
        LogMode::Json
    } else {
        default_log_mode()
    }
}

pub fn init_logging_with(mode: LogMode) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    match mode {
        LogMode::Json => builder.json().flatten_event(true).init(),
        LogMode::Pretty => builder.with_target(false).init(),
    }
}

pub fn default_log_mode() -> LogMode {
    if io::stderr().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Json,
    Pretty,
}
