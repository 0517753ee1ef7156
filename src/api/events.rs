//! Community Event Calls
//!
//! Upcoming events for the configured city, event submission and RSVPs.

use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::models::{CommunityEvent, NewCommunityEvent, NewRsvp, Rsvp};
use super::{get_json, post_json, Query};

pub fn events_url(config: &AppConfig) -> String {
    Query::new()
        .param("city", &config.city)
        .param("upcoming_only", true)
        .to_url(&config.endpoint("/community-events"))
}

pub async fn list_upcoming_events(config: &AppConfig) -> ApiResult<Vec<CommunityEvent>> {
    get_json(&events_url(config)).await
}

/// Submit an event; it stays hidden until an admin approves it
pub async fn submit_event(config: &AppConfig, event: &NewCommunityEvent) -> ApiResult<CommunityEvent> {
    post_json(&config.endpoint("/community-events"), event).await
}

pub async fn create_rsvp(config: &AppConfig, rsvp: &NewRsvp) -> ApiResult<Rsvp> {
    post_json(&config.endpoint("/rsvps"), rsvp).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_url_filters_upcoming() {
        assert_eq!(
            events_url(&AppConfig::default()),
            "http://localhost:8000/community-events?city=Knoxville%2C%20TN&upcoming_only=true"
        );
    }
}
