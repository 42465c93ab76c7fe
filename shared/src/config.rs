//! Dashboard configuration.
//!
//! Every field has a default so a partial (or empty) JSON document is a valid
//! configuration. The frontend starts from the defaults and applies the
//! overrides it finds in browser storage.

use serde::{Deserialize, Serialize};

use crate::money::CurrencyFormat;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Page the browser is sent to when the session is missing or rejected
    #[serde(default = "default_login_page")]
    pub login_page: String,

    /// How long success and error notices stay on screen
    #[serde(default = "default_notice_duration_ms")]
    pub notice_duration_ms: u32,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub storage_keys: StorageKeys,

    #[serde(default)]
    pub currency: CurrencyFormat,
}

/// Names of the browser storage entries the dashboard reads and writes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageKeys {
    #[serde(default = "default_token_key")]
    pub auth_token: String,
    #[serde(default = "default_user_key")]
    pub logged_user: String,
    #[serde(default = "default_theme_key")]
    pub theme: String,
    #[serde(default = "default_api_url_key")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_login_page() -> String {
    "index.html".to_string()
}

fn default_notice_duration_ms() -> u32 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_token_key() -> String {
    "authToken".to_string()
}

fn default_user_key() -> String {
    "loggedUser".to_string()
}

fn default_theme_key() -> String {
    "theme".to_string()
}

fn default_api_url_key() -> String {
    "apiBaseUrl".to_string()
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            auth_token: default_token_key(),
            logged_user: default_user_key(),
            theme: default_theme_key(),
            api_base_url: default_api_url_key(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            login_page: default_login_page(),
            notice_duration_ms: default_notice_duration_ms(),
            log_level: default_log_level(),
            storage_keys: StorageKeys::default(),
            currency: CurrencyFormat::default(),
        }
    }
}

impl DashboardConfig {
    /// Replace the API base URL, ignoring blank overrides
    pub fn with_api_base_url(mut self, url: &str) -> Self {
        let url = normalize_base_url(url);
        if !url.is_empty() {
            self.api_base_url = url;
        }
        self
    }

    /// Parsed log level; unknown names fall back to `Info`
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Info)
    }
}

/// Trim whitespace and trailing slashes from a base URL
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
        assert_eq!(config.login_page, "index.html");
        assert_eq!(config.notice_duration_ms, 3000);
        assert_eq!(config.storage_keys.auth_token, "authToken");
        assert_eq!(config.storage_keys.logged_user, "loggedUser");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{"api_base_url": "https://fin.example.com/api"}"#).unwrap();
        assert_eq!(config.api_base_url, "https://fin.example.com/api");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.currency, CurrencyFormat::default());
    }

    #[test]
    fn test_api_base_override_is_normalized() {
        let config = DashboardConfig::default().with_api_base_url(" https://api.test/v1// ");
        assert_eq!(config.api_base_url, "https://api.test/v1");

        let unchanged = DashboardConfig::default().with_api_base_url("   ");
        assert_eq!(unchanged.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_log_level_filter() {
        let mut config = DashboardConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }
}
