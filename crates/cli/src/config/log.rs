//! Logging configuration.
//!
//! `LogConfig` selects the log targets (stdout, stderr, journald, file) and the
//! minimum level, and installs the matching `tracing` layers. Standard output
//! is off by default because the print path of podgen owns it.
use std::{fs::OpenOptions, path::PathBuf};

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log records go and which of them are kept.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogConfig {
    /// Append log records to this file when set.
    #[serde(default = "LogConfig::default_file_path")]
    pub file_path: Option<PathBuf>,

    #[serde(default = "LogConfig::default_emit_journald")]
    pub emit_journald: bool,

    #[serde(default = "LogConfig::default_emit_stdout")]
    pub emit_stdout: bool,

    #[serde(default = "LogConfig::default_emit_stderr")]
    pub emit_stderr: bool,

    /// Records below this level are dropped.
    #[serde(default = "LogConfig::default_log_level")]
    #[serde_as(as = "DisplayFromStr")]
    pub level: tracing::Level,
}

impl Default for LogConfig {
    /// `INFO` records written to standard error only.
    fn default() -> Self {
        Self {
            file_path: Self::default_file_path(),
            emit_journald: Self::default_emit_journald(),
            emit_stdout: Self::default_emit_stdout(),
            emit_stderr: Self::default_emit_stderr(),
            level: Self::default_log_level(),
        }
    }
}

impl LogConfig {
    #[inline]
    #[must_use]
    pub const fn default_log_level() -> tracing::Level { tracing::Level::INFO }

    #[inline]
    #[must_use]
    pub const fn default_file_path() -> Option<PathBuf> { None }

    #[inline]
    #[must_use]
    pub const fn default_emit_journald() -> bool { false }

    #[inline]
    #[must_use]
    pub const fn default_emit_stdout() -> bool { false }

    #[inline]
    #[must_use]
    pub const fn default_emit_stderr() -> bool { true }

    /// Log targets switched on by this configuration, in installation order.
    #[must_use]
    pub fn targets(&self) -> Vec<LogTarget> {
        let Self { emit_journald, file_path, emit_stdout, emit_stderr, .. } = self;
        [
            emit_journald.then_some(LogTarget::Journald),
            file_path.clone().map(LogTarget::File),
            emit_stdout.then_some(LogTarget::Stdout),
            emit_stderr.then_some(LogTarget::Stderr),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Installs the global `tracing` subscriber described by this
    /// configuration.
    ///
    /// A target that cannot be opened (an unwritable log file, a missing
    /// journald socket) is skipped silently.
    ///
    /// # Panics
    ///
    /// Panics if a global subscriber has already been installed.
    pub fn registry(&self) {
        let layers = self.targets().into_iter().filter_map(LogTarget::layer).collect::<Vec<_>>();

        tracing_subscriber::registry()
            .with(layers)
            .with(tracing_subscriber::filter::LevelFilter::from_level(self.level))
            .init();
    }
}

/// A destination for log records.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LogTarget {
    Stdout,
    Stderr,
    Journald,
    File(PathBuf),
}

impl LogTarget {
    /// Builds the formatting layer writing to this target, or `None` when the
    /// target is unavailable.
    fn layer(self) -> Option<Box<dyn Layer<Registry> + Send + Sync + 'static>> {
        let fmt = tracing_subscriber::fmt::layer().with_target(false);

        match self {
            Self::Stdout => Some(fmt.with_writer(std::io::stdout).boxed()),
            Self::Stderr => Some(fmt.with_writer(std::io::stderr).boxed()),
            Self::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path).ok()?;
                Some(fmt.with_ansi(false).with_writer(file).boxed())
            }
            Self::Journald => Some(tracing_journald::layer().ok()?.boxed()),
        }
    }
}
