//! Logging setup: a log file always, stdout when asked for.
//!
//! Filter priority: `WORDBOOK_LOG` > `RUST_LOG` > `warn` globally with `info` for this crate.
//! Stdout output is enabled when either variable is set, or in debug builds.
//!
//! The log file lives at `<data_local_dir>/wordbook/logs/wordbook-<pid>.log`.

use std::{
    env,
    path::PathBuf,
};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Layer,
    Registry,
};

use crate::persistence::APP_NAME;

const LOG_ENV: &str = "WORDBOOK_LOG";
const DEFAULT_FILTER: &str = "warn,wordbook=info";

/// Must be held for the lifetime of the program; dropping it flushes the file writer.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

pub fn init() -> Result<LogGuard, Box<dyn std::error::Error + Send + Sync>> {
    let log_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_NAME).join("logs");
    let filename = format!("{}-{}.log", APP_NAME, std::process::id());

    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer =
        fmt::layer().with_writer(non_blocking_file).with_ansi(false).with_filter(create_filter()?);

    let stdout_enabled =
        env::var(LOG_ENV).is_ok() || env::var("RUST_LOG").is_ok() || cfg!(debug_assertions);

    let stdout_layer =
        if stdout_enabled { Some(fmt::layer().with_filter(create_filter()?)) } else { None };

    Registry::default().with(file_layer).with(stdout_layer).try_init()?;

    Ok(LogGuard { _file_guard: file_guard, log_file: log_dir.join(filename) })
}

/// Stdout-only logging for tests. Safe to call from every test.
pub fn test() {
    let _ = create_filter().map(|filter| fmt().with_env_filter(filter).with_test_writer().try_init());
}

fn create_filter() -> Result<EnvFilter, Box<dyn std::error::Error + Send + Sync>> {
    if let Ok(directives) = env::var(LOG_ENV) {
        return Ok(EnvFilter::try_new(directives)?);
    }

    if env::var("RUST_LOG").is_ok() {
        return Ok(EnvFilter::try_from_default_env()?);
    }

    Ok(EnvFilter::try_new(DEFAULT_FILTER)?)
}
