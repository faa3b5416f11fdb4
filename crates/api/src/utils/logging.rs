//! Logging setup and structured command logging

use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wellscope_domain::ReportError;

/// Environment variable selecting the log format (`json` or text).
pub const LOG_FORMAT_VAR: &str = "WELLSCOPE_LOG_FORMAT";

const DEFAULT_FILTER: &str = "warn";

/// Install the global tracing subscriber.
///
/// Logs go to stderr so stdout carries only the report. The filter comes from
/// `RUST_LOG` and defaults to `warn`.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let json = std::env::var(LOG_FORMAT_VAR).is_ok_and(|format| format.eq_ignore_ascii_case("json"));
    let installed = if json {
        builder.json().try_init()
    } else {
        builder.with_target(false).try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` should be a stable identifier such as `"analyze"`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, outcome: Result<(), &ReportError>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match outcome {
        Ok(()) => info!(command, duration_ms, "command_execution_success"),
        Err(error) => {
            warn!(command, duration_ms, error_type = error.label(), "command_execution_failure");
        }
    }
}
