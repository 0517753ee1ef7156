//! Frontend Models
//!
//! View-models matching the CivicPulse API responses, and the payloads
//! posted back to it.

use serde::{Deserialize, Serialize};

/// News feed item (matches backend `Item`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    pub url: Option<String>,
    pub category: Option<String>,
    pub source: Option<String>,
    #[serde(default)]
    pub importance: f64,
    pub city: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub is_official: Option<bool>,
}

/// Marketplace listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub price: f64,
    pub category: Option<String>,
    pub city: Option<String>,
    pub description: Option<String>,
    pub contact: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityEvent {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    pub venue: Option<String>,
    pub starts_at: String,
    pub ends_at: Option<String>,
    pub host_contact: Option<String>,
    pub description: Option<String>,
    pub city: Option<String>,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Office {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub jurisdiction: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: u32,
    pub full_name: String,
    pub party: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Office holder currently in a term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incumbent {
    pub office: Office,
    pub person: Person,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidacy {
    #[serde(default)]
    pub id: u32,
    pub race_id: u32,
    #[serde(default)]
    pub party: Option<String>,
    pub status: Option<String>,
    pub platform: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub filed_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub person: Person,
    pub candidacy: Candidacy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub election_date: Option<String>,
    #[serde(default)]
    pub jurisdiction: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub office_id: Option<u32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Discussion comment on a feed item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub id: u32,
    pub item_id: u32,
    pub author: Option<String>,
    pub body: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rsvp {
    #[serde(default)]
    pub id: u32,
    pub event_id: u32,
    pub name: String,
    pub email: Option<String>,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response of the seed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestSummary {
    pub created: u32,
}

// ========================
// Payloads
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewListing {
    pub title: String,
    pub price: f64,
    pub category: String,
    pub city: String,
    pub contact: String,
    pub description: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCommunityEvent {
    pub title: String,
    pub venue: String,
    pub starts_at: String,
    pub ends_at: Option<String>,
    pub host_contact: String,
    pub description: String,
    pub city: String,
    pub is_approved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewComment {
    pub item_id: u32,
    pub author: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRsvp {
    pub event_id: u32,
    pub name: String,
    pub email: Option<String>,
    pub count: u32,
}

fn default_true() -> bool {
    true
}

fn default_count() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_item_tolerates_missing_optionals() {
        let item: FeedItem = serde_json::from_str(r#"{"title":"Budget hearing","importance":3.5}"#).unwrap();
        assert_eq!(item.title, "Budget hearing");
        assert_eq!(item.importance, 3.5);
        assert_eq!(item.url, None);
        assert_eq!(item.id, 0);
    }

    #[test]
    fn test_listing_ignores_unknown_fields() {
        let json = r#"{"id":7,"title":"Bike","price":40,"category":"for_sale","city":"Knoxville, TN",
            "description":null,"contact":"a@b.c","is_active":true,"created_at":"2026-10-01T12:00:00","extra":1}"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.id, 7);
        assert_eq!(listing.price, 40.0);
        assert!(listing.is_active);
    }

    #[test]
    fn test_nested_directory_entries() {
        let json = r#"[{"office":{"id":1,"name":"Mayor","jurisdiction":"City of Knoxville","level":"city","district":null},
            "person":{"id":2,"full_name":"Jane Doe","party":null,"website":null,"email":null,"phone":null,"photo_url":null}}]"#;
        let incumbents: Vec<Incumbent> = serde_json::from_str(json).unwrap();
        assert_eq!(incumbents[0].office.name, "Mayor");
        assert_eq!(incumbents[0].person.party, None);

        let json = r#"[{"person":{"id":3,"full_name":"Sam Roe","party":"Independent"},
            "candidacy":{"id":4,"race_id":9,"status":"filed","platform":"Parks"}}]"#;
        let candidates: Vec<Candidate> = serde_json::from_str(json).unwrap();
        assert_eq!(candidates[0].candidacy.race_id, 9);
        assert_eq!(candidates[0].person.party.as_deref(), Some("Independent"));
    }

    #[test]
    fn test_rsvp_count_defaults_to_one() {
        let rsvp: Rsvp = serde_json::from_str(r#"{"id":1,"event_id":2,"name":"Ana","email":null}"#).unwrap();
        assert_eq!(rsvp.count, 1);
    }

    #[test]
    fn test_event_payload_serializes_null_end() {
        let payload = NewCommunityEvent {
            title: "Cleanup".into(),
            venue: "Park".into(),
            starts_at: "2026-10-20T14:00:00.000Z".into(),
            ends_at: None,
            host_contact: "host@example.org".into(),
            description: String::new(),
            city: "Knoxville, TN".into(),
            is_approved: false,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["ends_at"].is_null());
        assert_eq!(value["is_approved"], false);
    }
}
