//! Centralized state management for the Actix web server
use std::time::Duration;

use crate::{analysis::Analyzer, config::UploadConfig, db};

/// Global, read-only state
pub trait Global {
    /// Database connection
    fn db(&self) -> &db::DatabaseConnection;
    /// Extraction and tagging service
    fn analyzer(&self) -> &Analyzer;
    /// Upload limits
    fn upload(&self) -> &UploadConfig;
    /// Upper bound on analysing one document
    fn analysis_timeout(&self) -> Duration;
}

/// Application state
#[derive(Debug, Clone)]
pub struct App {
    /// Database connection
    pub db: db::DatabaseConnection,
    /// Extraction and tagging service
    pub analyzer: Analyzer,
    /// Upload limits
    pub upload: UploadConfig,
    /// Upper bound on analysing one document
    pub analysis_timeout: Duration,
}

impl Global for App {
    fn db(&self) -> &db::DatabaseConnection {
        &self.db
    }

    fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    fn upload(&self) -> &UploadConfig {
        &self.upload
    }

    fn analysis_timeout(&self) -> Duration {
        self.analysis_timeout
    }
}
