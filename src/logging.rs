//! Logging collaborator handed to services and repositories.
//!
//! A [`Logger`] owns a [`tracing::Dispatch`] and emits events through it with
//! a scoped default, so nothing in the crate installs or depends on a global
//! subscriber. Build one at start-up and clone it into every component.

use crate::config::LogConfig;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

/// Errors raised while building a [`Logger`] from configuration.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log level '{level}': {source}")]
    InvalidLevel {
        /// Rejected directive.
        level: String,
        /// Parser failure.
        source: ParseError,
    },

    /// The configured log file could not be opened for appending.
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Cloneable handle to a tracing dispatcher.
#[derive(Debug, Clone)]
pub struct Logger {
    dispatch: Dispatch,
}

impl Logger {
    /// Wraps an existing dispatcher.
    #[must_use]
    pub const fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    /// Creates a logger that discards every event.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Dispatch::none())
    }

    /// Builds a JSON logger writing to stdout and, when configured, to a file.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidLevel`] when the level does not parse and
    /// [`LoggerError::LogFile`] when the log file cannot be opened.
    pub fn from_config(config: &LogConfig) -> Result<Self, LoggerError> {
        let filter =
            EnvFilter::try_new(config.level()).map_err(|source| LoggerError::InvalidLevel {
                level: config.level().to_owned(),
                source,
            })?;

        let writer = match config.file() {
            Some(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|source| LoggerError::LogFile {
                        path: path.to_path_buf(),
                        source,
                    })?;
                BoxMakeWriter::new(std::io::stdout.and(Arc::new(file)))
            }
            None => BoxMakeWriter::new(std::io::stdout),
        };

        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(writer)
            .finish();
        Ok(Self::new(Dispatch::new(subscriber)))
    }

    /// Runs `f` with this logger's dispatcher as the scoped default.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Records a fault caught at an operation boundary.
    pub fn fault(&self, layer: &str, operation: &str, cause: &str) {
        self.in_scope(|| {
            tracing::error!(layer, operation, cause, "panic in {layer}.{operation}");
        });
    }
}

impl Default for Logger {
    /// Adopts the dispatcher that is current for the calling thread.
    fn default() -> Self {
        Self::new(tracing::dispatcher::get_default(Dispatch::clone))
    }
}
