//! Environment-driven configuration.
//!
//! Configuration is read from process environment variables:
//!
//! - `STORAGE_BACKEND`: `memory` (default) or `postgres`
//! - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `DB_SSLMODE`
//! - `LOG_LEVEL` (default `info`) and `LOG_FILE` (optional)
//!
//! [`AppConfig::from_lookup`] accepts any key lookup so tests never touch the
//! real environment.

use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_SSL_MODE: &str = "disable";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `STORAGE_BACKEND` names an unsupported backend.
    #[error("unsupported storage backend: {0}")]
    UnknownBackend(String),

    /// A variable required by the selected backend is unset or blank.
    #[error("missing required configuration variable {0}")]
    Missing(&'static str),

    /// `DB_PORT` is not a valid TCP port.
    #[error("invalid database port: {0}")]
    InvalidPort(String),
}

/// Storage backend selected for repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Process-local, concurrency-safe maps.
    #[default]
    Memory,
    /// `PostgreSQL` through a pooled Diesel connection.
    Postgres,
}

impl TryFrom<&str> for StorageBackend {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "memory" => Ok(Self::Memory),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            _ => Err(ConfigError::UnknownBackend(value.to_owned())),
        }
    }
}

/// Connection settings for the relational backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    host: String,
    port: u16,
    user: String,
    password: String,
    name: String,
    ssl_mode: String,
}

impl DatabaseConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_blank(lookup, "DB_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_DB_PORT,
        };

        Ok(Self {
            host: required(lookup, "DB_HOST")?,
            port,
            user: required(lookup, "DB_USER")?,
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            name: required(lookup, "DB_NAME")?,
            ssl_mode: non_blank(lookup, "DB_SSLMODE").unwrap_or_else(|| DEFAULT_SSL_MODE.to_owned()),
        })
    }

    /// Returns the database host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the database port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the libpq SSL mode.
    #[must_use]
    pub fn ssl_mode(&self) -> &str {
        &self.ssl_mode
    }

    /// Renders a libpq key/value connection string.
    ///
    /// Every value is quoted, so credentials may contain any character.
    #[must_use]
    pub fn connection_string(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={} sslmode={}",
            conninfo_value(&self.host),
            self.port,
            conninfo_value(&self.user),
            conninfo_value(&self.password),
            conninfo_value(&self.name),
            conninfo_value(&self.ssl_mode),
        )
    }
}

/// Quotes a libpq connection value, escaping backslashes and single quotes.
fn conninfo_value(raw: &str) -> String {
    let escaped = raw.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    level: String,
    file: Option<PathBuf>,
}

impl LogConfig {
    /// Creates logging settings with the given filter directive.
    #[must_use]
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            file: None,
        }
    }

    /// Also writes log lines to `path`.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Returns the filter directive, for example `info` or `taskdeck=debug`.
    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Returns the optional log file path.
    #[must_use]
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_LEVEL)
    }
}

/// Complete process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    backend: StorageBackend,
    database: Option<DatabaseConfig>,
    log: LogConfig,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`.
    ///
    /// Database settings are only read, and only required, when the backend
    /// is [`StorageBackend::Postgres`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the backend is unknown, a required
    /// database variable is missing, or the port does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend = StorageBackend::try_from(
            lookup("STORAGE_BACKEND").unwrap_or_default().as_str(),
        )?;
        let database = match backend {
            StorageBackend::Memory => None,
            StorageBackend::Postgres => Some(DatabaseConfig::from_lookup(&lookup)?),
        };

        let mut log = LogConfig::new(
            non_blank(&lookup, "LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned()),
        );
        if let Some(path) = non_blank(&lookup, "LOG_FILE") {
            log = log.with_file(path);
        }

        Ok(Self {
            backend,
            database,
            log,
        })
    }

    /// Returns the selected storage backend.
    #[must_use]
    pub const fn backend(&self) -> StorageBackend {
        self.backend
    }

    /// Returns database settings when the backend is `PostgreSQL`.
    #[must_use]
    pub const fn database(&self) -> Option<&DatabaseConfig> {
        self.database.as_ref()
    }

    /// Returns logging settings.
    #[must_use]
    pub const fn log(&self) -> &LogConfig {
        &self.log
    }
}

fn non_blank(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<String, ConfigError> {
    non_blank(lookup, key).ok_or(ConfigError::Missing(key))
}
