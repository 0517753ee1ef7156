//! Frontend Configuration
//!
//! Values are baked in at build time. Each one can be overridden by an
//! environment variable visible to `cargo build` / `trunk build`.

use std::str::FromStr;

use log::{Level, LevelFilter};

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_CITY: &str = "Knoxville, TN";
pub const DEFAULT_JURISDICTION: &str = "City of Knoxville";
pub const DEFAULT_FEED_LIMIT: u32 = 50;

/// Application configuration, provided via context
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// API origin without trailing slash
    pub api_base: String,
    /// City used for marketplace, events and new submissions
    pub city: String,
    /// Jurisdiction used for incumbents and races
    pub jurisdiction: String,
    /// Maximum feed items requested per load
    pub feed_limit: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            city: DEFAULT_CITY.to_string(),
            jurisdiction: DEFAULT_JURISDICTION.to_string(),
            feed_limit: DEFAULT_FEED_LIMIT,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build from compile-time environment overrides
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("CIVICPULSE_API_BASE"),
            option_env!("CIVICPULSE_CITY"),
            option_env!("CIVICPULSE_JURISDICTION"),
            option_env!("CIVICPULSE_LOG"),
        )
    }

    fn from_overrides(
        api_base: Option<&str>,
        city: Option<&str>,
        jurisdiction: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base: non_empty(api_base)
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            city: non_empty(city).map(str::to_string).unwrap_or(defaults.city),
            jurisdiction: non_empty(jurisdiction)
                .map(str::to_string)
                .unwrap_or(defaults.jurisdiction),
            feed_limit: defaults.feed_limit,
            log_level: non_empty(log_level)
                .and_then(|level| LevelFilter::from_str(level).ok())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Level handed to the console logger; `None` when logging is off
    pub fn console_level(&self) -> Option<Level> {
        self.log_level.to_level()
    }

    /// Join an endpoint path onto the API origin
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
