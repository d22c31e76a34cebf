//! Application configuration.
//!
//! Read from a TOML file (`lexis.toml` by default). Every key is optional; a missing
//! file yields the defaults. The database location can always be overridden with the
//! `DATABASE_URL` environment variable.
use std::env;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_derive::Deserialize;

use crate::extraction::EmptyPagePolicy;

/// Database used when neither `DATABASE_URL` nor `[database] url` is set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://lexis.sqlite3?mode=rwc";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listener.
    pub server: ServerConfig,
    /// Upload limits.
    pub upload: UploadConfig,
    /// Extraction and tagging.
    pub analysis: AnalysisConfig,
    /// Persistence.
    pub database: DatabaseConfig,
    /// Log output.
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_owned(),
            port: 8000,
        }
    }
}

/// Upload limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Largest accepted `pdf_file`, in bytes.
    pub max_file_size: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024,
        }
    }
}

/// Extraction and tagging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Upper bound on extraction plus tagging of a single document, in seconds.
    pub timeout_secs: u64,
    /// What to do with pages that yield no text.
    pub empty_pages: EmptyPagePolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            empty_pages: EmptyPagePolicy::Skip,
        }
    }
}

impl AnalysisConfig {
    /// The timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Persistence settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sqlx connection URL. `sqlite://` and `postgres://` are supported.
    pub url: Option<String>,
}

/// Log output settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write daily-rotated log files to this directory instead of stdout.
    pub directory: Option<PathBuf>,
}

impl Config {
    /// Load the configuration at `path`, falling back to defaults if there is no file.
    ///
    /// # Errors
    /// Will error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let config_str = read_to_string(path)?;
        let conf: Self = toml::from_str(&config_str)?;
        Ok(conf)
    }

    /// Connection URL: `DATABASE_URL`, then `[database] url`, then the local `SQLite` file.
    #[must_use]
    pub fn database_url(&self) -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| {
            self.database
                .url
                .clone()
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned())
        })
    }
}
