//! Logging configuration with file-based output and size-based rotation.
//!
//! Writes logs to `~/.config/grace/grace.log` (or platform equivalent)
//! with 10 MB size-based rotation. Set `DEBUG_LOGGING=1` to enable
//! debug output for grace crates.

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Initialize logging with dual output (file + stderr).
///
/// Returns a `WorkerGuard` that must be held for the process lifetime
/// so buffered logs are flushed on shutdown. Falls back to stderr-only
/// logging when the log directory is unavailable.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let log_dir = match dirs::config_dir() {
        Some(config) => config.join("grace"),
        None => {
            init_stderr_only(debug_logging);
            return None;
        }
    };

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        // Can't use tracing yet since no subscriber is installed.
        eprintln!("failed to create log directory {log_dir:?}: {e}, using stderr only");
        init_stderr_only(debug_logging);
        return None;
    }

    let log_path = log_dir.join("grace.log");
    let file_appender = match BasicRollingFileAppender::new(
        &log_path,
        RollingConditionBasic::new().max_size(10 * 1024 * 1024), // 10 MB
        1, // Keep only the latest rotated file
    ) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("failed to create log file at {log_path:?}: {e}");
            init_stderr_only(debug_logging);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // File output: INFO+ always, no ANSI colors.
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(stderr_filter(debug_logging));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Some(guard)
}

fn init_stderr_only(debug_logging: bool) {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(stderr_filter(debug_logging)),
        )
        .init();
}

fn stderr_filter(debug_logging: bool) -> EnvFilter {
    let default = if debug_logging {
        "info,grace_core=debug,grace_cli=debug"
    } else {
        "info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
