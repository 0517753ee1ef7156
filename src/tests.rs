//! Request/render flows against an in-memory backend.
//!
//! `EchoBackend` answers the same URLs and JSON shapes the real API does,
//! so these tests cover form -> payload -> POST -> re-fetch -> cards.

use std::collections::HashMap;

use chrono::Utc;
use serde_json::{json, Value};

use crate::api::{self, FeedFilter, SeedDecision};
use crate::context::SeedLatch;
use crate::config::AppConfig;
use crate::forms::{EventForm, ListingForm};
use crate::models::{CommunityEvent, FeedItem, IngestSummary, Listing};
use crate::render::render_list;

#[derive(Default)]
struct EchoBackend {
    rows: HashMap<&'static str, Vec<Value>>,
    next_id: u64,
    ingest_posts: usize,
}

impl EchoBackend {
    /// Mirrors the ingest endpoint: adds placeholder items
    fn ingest(&mut self, config: &AppConfig, url: &str) -> Value {
        assert_eq!(url, api::ingest_url(config));
        self.ingest_posts += 1;
        let items = self.rows.entry("items").or_default();
        for source in ["city.gov", "local_news"] {
            items.push(json!({"id": items.len() + 1, "title": format!("Update from {}", source), "importance": 1.0, "source": source}));
        }
        json!({"created": 2})
    }

    fn post(&mut self, config: &AppConfig, url: &str, body: &str) -> Value {
        let mut row: Value = serde_json::from_str(body).unwrap();
        self.next_id += 1;
        row["id"] = json!(self.next_id);
        let table = if url == config.endpoint("/listings") {
            "listings"
        } else if url == config.endpoint("/community-events") {
            "events"
        } else {
            panic!("unexpected POST {}", url);
        };
        self.rows.entry(table).or_default().push(row.clone());
        row
    }

    fn get(&self, config: &AppConfig, url: &str) -> String {
        let rows = if url == api::listings_url(config) {
            self.table("listings")
        } else if url == api::events_url(config) {
            // Only approved events are listed
            self.table("events")
                .into_iter()
                .filter(|e| e["is_approved"] == json!(true))
                .collect()
        } else if url.starts_with(&config.endpoint("/items")) {
            self.table("items")
        } else {
            panic!("unexpected GET {}", url);
        };
        Value::Array(rows).to_string()
    }

    fn table(&self, name: &str) -> Vec<Value> {
        self.rows.get(name).cloned().unwrap_or_default()
    }

    fn approve_all_events(&mut self) {
        for event in self.rows.entry("events").or_default() {
            event["is_approved"] = json!(true);
        }
    }
}

fn card_count(html: &str) -> usize {
    html.matches(r#"class="card"#).count()
}

#[test]
fn test_empty_backend_renders_empty_containers() {
    let config = AppConfig::default();
    let backend = EchoBackend::default();

    let feed: Vec<FeedItem> = serde_json::from_str(&backend.get(&config, &api::items_url(&config, &FeedFilter::default()))).unwrap();
    let listings: Vec<Listing> = serde_json::from_str(&backend.get(&config, &api::listings_url(&config))).unwrap();
    assert_eq!(render_list(&feed), "");
    assert_eq!(render_list(&listings), "");
}

#[test]
fn test_posted_listing_appears_after_refetch() {
    let config = AppConfig::default();
    let mut backend = EchoBackend::default();

    let form = ListingForm {
        title: "Kayak".into(),
        price: "275".into(),
        category: String::new(),
        contact: "paddle@example.org".into(),
        description: "Two seats".into(),
    };
    let body = serde_json::to_string(&form.to_payload(&config.city).unwrap()).unwrap();
    let echoed = backend.post(&config, &config.endpoint("/listings"), &body);
    assert_eq!(echoed["city"], "Knoxville, TN");

    let listings: Vec<Listing> = serde_json::from_str(&backend.get(&config, &api::listings_url(&config))).unwrap();
    let html = render_list(&listings);
    assert_eq!(card_count(&html), 1);
    assert!(html.contains("<strong>Kayak</strong> — $275.00"));
    assert!(html.contains("<small>for_sale • Knoxville, TN</small>"));
}

#[test]
fn test_submitted_event_waits_for_approval() {
    let config = AppConfig::default();
    let mut backend = EchoBackend::default();

    let form = EventForm {
        title: "Greenway walk".into(),
        venue: "Ijams".into(),
        starts_at: "2026-11-07T10:00".into(),
        ends_at: "2026-11-07T12:00".into(),
        host_contact: "walks@example.org".into(),
        description: String::new(),
    };
    let body = serde_json::to_string(&form.to_payload(&config.city, &Utc).unwrap()).unwrap();
    backend.post(&config, &config.endpoint("/community-events"), &body);

    let pending: Vec<CommunityEvent> = serde_json::from_str(&backend.get(&config, &api::events_url(&config))).unwrap();
    assert!(pending.is_empty());

    backend.approve_all_events();
    let events: Vec<CommunityEvent> = serde_json::from_str(&backend.get(&config, &api::events_url(&config))).unwrap();
    let html = render_list(&events);
    assert_eq!(card_count(&html), 1);
    assert!(html.contains("Greenway walk"));
    assert!(html.contains("2026-11-07 10:00 → 2026-11-07 12:00 • Ijams"));
}

#[test]
fn test_feed_card_count_matches_response() {
    let config = AppConfig::default();
    let mut backend = EchoBackend::default();
    backend.rows.insert(
        "items",
        (0..4)
            .map(|i| json!({"id": i, "title": format!("Notice {}", i), "importance": 1.5, "category": "public_notice"}))
            .collect(),
    );

    let filter = FeedFilter { city: String::new(), category: "public_notice".into(), limit: Some(config.feed_limit) };
    let feed: Vec<FeedItem> = serde_json::from_str(&backend.get(&config, &api::items_url(&config, &filter))).unwrap();
    let html = render_list(&feed);
    assert_eq!(card_count(&html), feed.len());
    assert!(html.contains("Notice 3"));
}

/// Claim half of a feed load; runs synchronously before any request
fn start_feed_load(latch: &mut SeedLatch) -> bool {
    latch.claim()
}

/// Async half of a feed load: optional seed, then the listing request
fn finish_feed_load(config: &AppConfig, backend: &mut EchoBackend, needs_seed: bool) -> Vec<FeedItem> {
    if needs_seed {
        let probe = serde_json::from_str::<Vec<FeedItem>>(&backend.get(config, &api::probe_url(config)))
            .map_err(crate::error::ApiError::decode);
        if api::seed_decision(&probe) == SeedDecision::Seed {
            let summary: IngestSummary = serde_json::from_value(backend.ingest(config, &api::ingest_url(config))).unwrap();
            assert_eq!(summary.created, 2);
        }
    }
    let url = api::items_url(config, &FeedFilter { limit: Some(config.feed_limit), ..Default::default() });
    serde_json::from_str(&backend.get(config, &url)).unwrap()
}

#[test]
fn test_overlapping_loads_seed_once() {
    let config = AppConfig::default();
    let mut backend = EchoBackend::default();
    let mut latch = SeedLatch::default();

    // Mount load and a Load click both start before either probe resolves
    let mount = start_feed_load(&mut latch);
    let click = start_feed_load(&mut latch);
    let first = finish_feed_load(&config, &mut backend, mount);
    let second = finish_feed_load(&config, &mut backend, click);

    assert_eq!(backend.ingest_posts, 1);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
}

#[test]
fn test_no_seed_when_items_exist() {
    let config = AppConfig::default();
    let mut backend = EchoBackend::default();
    backend.rows.insert("items", vec![json!({"id": 1, "title": "Zoning hearing", "importance": 3.0})]);
    let mut latch = SeedLatch::default();

    let needs_seed = start_feed_load(&mut latch);
    let feed = finish_feed_load(&config, &mut backend, needs_seed);

    assert_eq!(backend.ingest_posts, 0);
    assert_eq!(feed.len(), 1);
    assert!(render_list(&feed).contains("Zoning hearing"));
}
