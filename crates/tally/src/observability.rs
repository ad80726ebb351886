//! Logging and tracing bootstrap.
//!
//! Human-readable events go to stderr, filtered by `RUST_LOG` or the
//! quiet/verbose flags. When a log destination is configured, a second
//! JSONL layer writes every event to a daily-rotated file through a
//! non-blocking appender; the returned guard must stay alive for the
//! duration of the process so buffered events flush on exit.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Where file logs should go, if anywhere.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (`TALLY_LOG_PATH`). Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for rotated log files (`TALLY_LOG_DIR` or config).
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with the config file's log
    /// directory as the fallback destination.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os("TALLY_LOG_PATH").map(PathBuf::from),
            log_dir: std::env::var_os("TALLY_LOG_DIR")
                .map(PathBuf::from)
                .or(config_log_dir),
        }
    }
}

/// Build the stderr filter from the CLI flags and the configured level.
///
/// `--quiet` wins over everything; each `-v` steps the level up; with
/// neither, `RUST_LOG` is honored and the config level is the default.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let directive = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => return EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config_level)),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    };
    EnvFilter::new(directive)
}

/// Install the global subscriber.
///
/// Returns the file appender's guard when file logging is active; drop
/// it only at process exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    let (file_layer, guard) = match file_writer(config)? {
        Some((writer, guard)) => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

type FileWriter = tracing_appender::non_blocking::NonBlocking;

fn file_writer(config: &ObservabilityConfig) -> anyhow::Result<Option<(FileWriter, WorkerGuard)>> {
    if let Some(ref path) = config.log_path {
        // parent() of a bare file name is Some(""), which create_dir_all rejects
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => std::path::Path::new("."),
        };
        let file_name = path
            .file_name()
            .with_context(|| format!("log path has no file name: {}", path.display()))?;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
        let appender = tracing_appender::rolling::never(parent, file_name);
        return Ok(Some(tracing_appender::non_blocking(appender)));
    }

    if let Some(ref dir) = config.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::daily(dir, "tally.jsonl");
        return Ok(Some(tracing_appender::non_blocking(appender)));
    }

    Ok(None)
}
