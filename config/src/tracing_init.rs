//! Tracing subscriber setup shared by the `pitch` binary.
//!
//! Filter comes from `RUST_LOG` (default `info`). Logs go to stderr so `--json` output on
//! stdout stays machine-readable; when `PITCH_LOG_FILE` is set they go to that file instead,
//! through a non-blocking `tracing-appender` writer.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Env var naming a log file; when unset, logs go to stderr.
pub const LOG_FILE_ENV: &str = "PITCH_LOG_FILE";

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("log file path has no file name: {0}")]
    BadLogPath(PathBuf),
    #[error("create log directory: {0}")]
    CreateDir(std::io::Error),
    #[error("set global subscriber: {0}")]
    SetGlobal(String),
}

/// Splits `path` into (directory, file name) for `tracing_appender::rolling::never`.
fn split_log_path(path: &Path) -> Result<(PathBuf, PathBuf), InitError> {
    let file = path
        .file_name()
        .map(PathBuf::from)
        .ok_or_else(|| InitError::BadLogPath(path.to_path_buf()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok((dir, file))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber. Keep the returned guard alive for the life of the process
/// so buffered file output is flushed on exit.
pub fn init() -> Result<Option<WorkerGuard>, InitError> {
    match std::env::var_os(LOG_FILE_ENV).filter(|v| !v.is_empty()) {
        Some(path) => {
            let (dir, file) = split_log_path(Path::new(&path))?;
            std::fs::create_dir_all(&dir).map_err(InitError::CreateDir)?;
            let appender = tracing_appender::rolling::never(dir, file);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(env_filter())
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .try_init()
                .map_err(|e| InitError::SetGlobal(e.to_string()))?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter())
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()
                .map_err(|e| InitError::SetGlobal(e.to_string()))?;
            Ok(None)
        }
    }
}
