//! User configuration for shelfmood
//!
//! This module handles user-configurable settings stored in settings.json.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::Paths;

pub const GOOGLE_BOOKS_API_URL: &str = "https://www.googleapis.com/books/v1/volumes";

const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
/// One week
const MAX_SESSION_IDLE_MINUTES: u64 = 7 * 24 * 60;

/// User configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    /// Volumes search endpoint
    #[serde(default = "default_books_api_url")]
    pub books_api_url: String,

    /// Optional API key, the public endpoint works without one
    #[serde(default)]
    pub books_api_key: Option<String>,

    /// Cap on results per search request
    #[serde(default = "default_search_max_results")]
    pub search_max_results: usize,

    /// Cap on author recommendations shown
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,

    /// Timeout for a single search request in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Sessions idle longer than this are dropped
    #[serde(default = "default_session_idle_minutes")]
    pub session_idle_minutes: u64,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            books_api_url: default_books_api_url(),
            books_api_key: None,
            search_max_results: default_search_max_results(),
            recommendation_limit: default_recommendation_limit(),
            request_timeout_secs: default_request_timeout_secs(),
            session_idle_minutes: default_session_idle_minutes(),
        }
    }
}

impl UserConfig {
    /// Load configuration from the settings file, writing defaults on first run
    pub fn load() -> Result<Self> {
        let paths = Paths::get()?;
        Self::load_from(&paths.settings_path())
    }

    pub fn load_from(settings_path: &Path) -> Result<Self> {
        if settings_path.exists() {
            let content =
                std::fs::read_to_string(settings_path).context("Failed to read settings file")?;
            let mut config: UserConfig =
                serde_json::from_str(&content).context("Failed to parse settings file")?;

            // the api caps maxResults at 40 and 0 would disable search entirely
            config.search_max_results = config.search_max_results.clamp(1, 40);
            config.request_timeout_secs = config
                .request_timeout_secs
                .clamp(1, MAX_REQUEST_TIMEOUT_SECS);
            config.session_idle_minutes = config
                .session_idle_minutes
                .clamp(1, MAX_SESSION_IDLE_MINUTES);

            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(settings_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save_to(&self, settings_path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(settings_path, content).context("Failed to write settings file")?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn session_idle(&self) -> chrono::Duration {
        let minutes = self.session_idle_minutes.min(MAX_SESSION_IDLE_MINUTES);
        chrono::Duration::minutes(minutes as i64)
    }
}

// Default value functions for serde

fn default_books_api_url() -> String {
    GOOGLE_BOOKS_API_URL.to_string()
}

fn default_search_max_results() -> usize {
    10
}

fn default_recommendation_limit() -> usize {
    5
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_session_idle_minutes() -> u64 {
    60
}
