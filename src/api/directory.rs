//! Government Directory Calls
//!
//! Incumbents, candidates and races, plus links to the backend RSS feeds.

use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::models::{Candidate, Incumbent, Race};
use super::{get_json, Query};

// ========================
// URLs
// ========================

pub fn incumbents_url(config: &AppConfig) -> String {
    Query::new()
        .param("jurisdiction", &config.jurisdiction)
        .to_url(&config.endpoint("/incumbents"))
}

/// Candidates, optionally narrowed to one race
pub fn candidates_url(config: &AppConfig, race_id: Option<u32>) -> String {
    let mut query = Query::new();
    if let Some(id) = race_id {
        query = query.param("race_id", id);
    }
    query.to_url(&config.endpoint("/candidates"))
}

pub fn races_url(config: &AppConfig) -> String {
    Query::new()
        .param("jurisdiction", &config.jurisdiction)
        .to_url(&config.endpoint("/races"))
}

pub fn incumbents_rss_url(config: &AppConfig) -> String {
    Query::new()
        .param("jurisdiction", &config.jurisdiction)
        .to_url(&config.endpoint("/rss/incumbents.xml"))
}

pub fn candidates_rss_url(config: &AppConfig, race_id: Option<u32>) -> String {
    let mut query = Query::new();
    if let Some(id) = race_id {
        query = query.param("race_id", id);
    }
    query.to_url(&config.endpoint("/rss/candidates.xml"))
}

/// City-level races feed for the configured jurisdiction
pub fn races_rss_url(config: &AppConfig) -> String {
    Query::new()
        .param("jurisdiction", &config.jurisdiction)
        .param("level", "city")
        .to_url(&config.endpoint("/rss/races.xml"))
}

// ========================
// Calls
// ========================

pub async fn list_incumbents(config: &AppConfig) -> ApiResult<Vec<Incumbent>> {
    get_json(&incumbents_url(config)).await
}

pub async fn list_candidates(config: &AppConfig, race_id: Option<u32>) -> ApiResult<Vec<Candidate>> {
    get_json(&candidates_url(config, race_id)).await
}

pub async fn list_races(config: &AppConfig) -> ApiResult<Vec<Race>> {
    get_json(&races_url(config)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incumbents_url() {
        assert_eq!(
            incumbents_url(&AppConfig::default()),
            "http://localhost:8000/incumbents?jurisdiction=City%20of%20Knoxville"
        );
    }

    #[test]
    fn test_candidates_url_with_and_without_race() {
        let config = AppConfig::default();
        assert_eq!(candidates_url(&config, None), "http://localhost:8000/candidates");
        assert_eq!(candidates_url(&config, Some(3)), "http://localhost:8000/candidates?race_id=3");
    }

    #[test]
    fn test_rss_urls() {
        let config = AppConfig::default();
        assert_eq!(
            incumbents_rss_url(&config),
            "http://localhost:8000/rss/incumbents.xml?jurisdiction=City%20of%20Knoxville"
        );
        assert_eq!(candidates_rss_url(&config, Some(5)), "http://localhost:8000/rss/candidates.xml?race_id=5");
        assert_eq!(races_url(&config), "http://localhost:8000/races?jurisdiction=City%20of%20Knoxville");
    }

    #[test]
    fn test_races_rss_url() {
        let config = AppConfig { jurisdiction: "Knox County".into(), ..AppConfig::default() };
        assert_eq!(
            races_rss_url(&AppConfig::default()),
            "http://localhost:8000/rss/races.xml?jurisdiction=City%20of%20Knoxville&level=city"
        );
        assert_eq!(races_rss_url(&config), "http://localhost:8000/rss/races.xml?jurisdiction=Knox%20County&level=city");
    }
}
