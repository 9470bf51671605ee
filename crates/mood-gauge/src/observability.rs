//! Logging setup: human-readable stderr output plus optional JSONL files.
//!
//! Stdout is reserved for command output (and for the MCP transport when
//! running `serve`), so every log line goes to stderr or to a file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_PATH_ENV: &str = "MOOD_GAUGE_LOG_PATH";
const LOG_DIR_ENV: &str = "MOOD_GAUGE_LOG_DIR";
const LOG_FILE_PREFIX: &str = "mood-gauge.jsonl";

/// Where file logs should be written, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file. Never rotated.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from the environment, falling back to the configured directory.
    ///
    /// `MOOD_GAUGE_LOG_PATH` wins over `MOOD_GAUGE_LOG_DIR`, which wins over
    /// `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::from_lookup(|key| std::env::var_os(key), config_log_dir)
    }

    fn from_lookup<F>(lookup: F, config_log_dir: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<std::ffi::OsString>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self {
            log_path: non_empty(LOG_PATH_ENV),
            log_dir: non_empty(LOG_DIR_ENV).or(config_log_dir),
        }
    }

    /// Resolve to `(directory, file name, rotate)`.
    fn file_target(&self) -> Option<(PathBuf, String, bool)> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            let name = path.file_name()?.to_string_lossy().into_owned();
            return Some((dir, name, false));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), LOG_FILE_PREFIX.to_string(), true))
    }
}

/// Build the level filter.
///
/// `RUST_LOG` takes precedence. Otherwise `-q` selects `error`, `-v` selects
/// `debug`, `-vv` and above select `trace`, and the configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_for(quiet, verbose, default_level))
}

fn level_for(quiet: bool, verbose: u8, default_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => default_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// Hold the returned guard until exit so buffered file logs are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    env_filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match config.file_target() {
        Some((dir, name, rotate)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = if rotate {
                tracing_appender::rolling::daily(&dir, &name)
            } else {
                tracing_appender::rolling::never(&dir, &name)
            };
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
