//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each list is
//! replaced wholesale by its loader; nothing is patched in place.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Candidate, CommunityEvent, FeedItem, Incumbent, Listing, Race};

/// Last loaded view-models, one field per page section
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub feed: Vec<FeedItem>,
    pub listings: Vec<Listing>,
    pub events: Vec<CommunityEvent>,
    pub incumbents: Vec<Incumbent>,
    pub candidates: Vec<Candidate>,
    /// Races offered by the candidate filter
    pub races: Vec<Race>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
