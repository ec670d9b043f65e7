//! Build-time Configuration
//!
//! The app is a static bundle, so settings are read from the environment
//! when it is compiled:
//! - `PREPA_ANALYSIS_URL` - analysis service base URL (default: `http://localhost:8000/api`)
//! - `PREPA_LOG_LEVEL` - `error` .. `trace` (default: `info`)

use std::str::FromStr;

use log::LevelFilter;

/// Default URL for local development.
pub const DEFAULT_ANALYSIS_URL: &str = "http://localhost:8000/api";

const ANALYZE_PATH: &str = "/timeline/analyze/";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub analysis_base_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::new(option_env!("PREPA_ANALYSIS_URL"), option_env!("PREPA_LOG_LEVEL"))
    }

    pub fn new(analysis_url: Option<&str>, log_level: Option<&str>) -> Self {
        let base = analysis_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_ANALYSIS_URL);
        let log_level = log_level
            .and_then(|level| LevelFilter::from_str(level.trim()).ok())
            .unwrap_or(LevelFilter::Info);
        Self {
            analysis_base_url: base.trim_end_matches('/').to_string(),
            log_level,
        }
    }

    /// Full URL of the timeline analysis endpoint
    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.analysis_base_url, ANALYZE_PATH)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}
