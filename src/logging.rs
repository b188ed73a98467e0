use std::env;
use std::fs;
use std::path::Path;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use media_triage::config::LOGS_DIR;

/// Diagnostic trace of the whole run, truncated at every start.
pub const DEBUG_LOG_FILE: &str = "triage.debug.log";

/// Set up tracing for stdout and file logging.
///
/// The stdout layer carries the operator-facing output, filtered by
/// `TRACING_LEVEL` (default `info`). The file layer is the debug log: it
/// always captures DEBUG and up, with ANSI disabled, and starts empty each
/// run. The returned guard must be held for the life of the process.
pub fn init_logger() -> impl Drop {
    let filter = env::var("TRACING_LEVEL").unwrap_or_else(|_| "info".to_string());
    let filter_layer = EnvFilter::new(filter);

    let logs_dir = Path::new(LOGS_DIR);
    let debug_log_path = logs_dir.join(DEBUG_LOG_FILE);
    let _ = fs::create_dir_all(logs_dir);
    let _ = fs::write(&debug_log_path, "");

    let file_appender = tracing_appender::rolling::never(logs_dir, DEBUG_LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .pretty()
                .with_file(false)
                .without_time()
                .with_ansi(true)
                .with_filter(filter_layer),
        )
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(LevelFilter::DEBUG),
        )
        .init();

    guard
}
