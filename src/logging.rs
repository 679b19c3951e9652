use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter target for this crate's log events (`RUST_LOG` overrides).
const LOG_TARGET: &str = "campus";

/// Initialize logging: compact output on stderr, plus a daily-rotated JSON
/// file when `log_file` is set.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, default_level)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer);

    match log_file {
        Some(path) => {
            let file_layer = fmt::layer()
                .with_writer(rolling_appender(&path))
                .with_ansi(false)
                .json();
            subscriber.with(file_layer).init();
        }
        None => subscriber.init(),
    }
}

/// Daily-rotated appender writing next to the requested log path, creating
/// the directory on demand.
fn rolling_appender(path: &Path) -> tracing_appender::rolling::RollingFileAppender {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let _ = std::fs::create_dir_all(dir);

    let file_name = path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("campus.log"));
    tracing_appender::rolling::daily(dir, file_name)
}
