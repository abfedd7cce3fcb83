//! Build-time Configuration
//!
//! The front-end is a static bundle, so settings are baked in when it is built:
//!
//! * `ITEMS_API_URL` - base URL of the items backend (default `http://localhost:8080`)
//! * `ITEMS_LOG_LEVEL` - console log level (default `info`)

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL without trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("ITEMS_API_URL"), option_env!("ITEMS_LOG_LEVEL"))
    }

    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);
        Self { api_base_url, log_level }
    }

    pub fn items_url(&self) -> String {
        format!("{}/items", self.api_base_url)
    }

    pub fn item_url(&self, id: i64) -> String {
        format!("{}/items/{}", self.api_base_url, id)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
