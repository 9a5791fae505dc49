//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use quillpad_infra::{FileSessionStore, HttpConfig};

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub token_file: PathBuf,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            http: HttpConfig::from_env(),
            token_file: env::var("QUILLPAD_TOKEN_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| FileSessionStore::default_path()),
            telemetry: TelemetryConfig::from_env(),
        }
    }

    /// Command-line flags win over the environment.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.http.base_url = url;
        }
        self
    }
}
