//! News Feed Calls
//!
//! Feed listing, the one-time seed request, and item discussion.

use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::models::{Comment, FeedItem, IngestSummary, NewComment};
use super::{get_json, post_empty, post_json, Query};

/// What to do with the result of the startup probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedDecision {
    /// Backend has no items: ask it to ingest
    Seed,
    /// Backend already has items
    Skip,
    /// Probe failed; warn and still load the feed
    Unreachable,
}

pub fn seed_decision(probe: &ApiResult<Vec<FeedItem>>) -> SeedDecision {
    match probe {
        Ok(items) if items.is_empty() => SeedDecision::Seed,
        Ok(_) => SeedDecision::Skip,
        Err(_) => SeedDecision::Unreachable,
    }
}

/// Filters read from the feed form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedFilter {
    pub city: String,
    pub category: String,
    pub limit: Option<u32>,
}

// ========================
// URLs
// ========================

pub fn items_url(config: &AppConfig, filter: &FeedFilter) -> String {
    let mut query = Query::new();
    if let Some(limit) = filter.limit {
        query = query.param("limit", limit);
    }
    query
        .opt("city", Some(filter.city.as_str()))
        .opt("category", Some(filter.category.as_str()))
        .to_url(&config.endpoint("/items"))
}

/// Probe used at startup to decide whether to seed
pub fn probe_url(config: &AppConfig) -> String {
    Query::new().param("limit", 1).to_url(&config.endpoint("/items"))
}

pub fn ingest_url(config: &AppConfig) -> String {
    config.endpoint("/ingest/from-config")
}

pub fn comments_url(config: &AppConfig, item_id: u32) -> String {
    config.endpoint(&format!("/comments/{}", item_id))
}

// ========================
// Calls
// ========================

pub async fn list_items(config: &AppConfig, filter: &FeedFilter) -> ApiResult<Vec<FeedItem>> {
    get_json(&items_url(config, filter)).await
}

/// Fetch at most one item to see whether the backend has any
pub async fn probe_feed(config: &AppConfig) -> ApiResult<Vec<FeedItem>> {
    get_json(&probe_url(config)).await
}

/// Ask the backend to ingest its configured sources
pub async fn seed_from_config(config: &AppConfig) -> ApiResult<IngestSummary> {
    post_empty(&ingest_url(config)).await
}

pub async fn list_comments(config: &AppConfig, item_id: u32) -> ApiResult<Vec<Comment>> {
    get_json(&comments_url(config, item_id)).await
}

pub async fn create_comment(config: &AppConfig, comment: &NewComment) -> ApiResult<Comment> {
    post_json(&config.endpoint("/comments"), comment).await
}
