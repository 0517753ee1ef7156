//! CivicPulse Frontend App
//!
//! Page layout. Feed, marketplace and events load on mount; the directory
//! loads on demand.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DirectoryPanel, DiscussionPanel, EventsPanel, FeedPanel, MarketplacePanel};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::info!("[APP] Using API at {} for {}", config.api_base, config.city);

    // Provide context to all children
    provide_context(AppContext::new(config));
    provide_context(Store::new(AppState::default()));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"CivicPulse"</h1>
            </header>
            <main class="main-content">
                <div class="column">
                    <FeedPanel />
                    <DiscussionPanel />
                </div>
                <div class="column">
                    <MarketplacePanel />
                    <EventsPanel />
                    <DirectoryPanel />
                </div>
            </main>
        </div>
    }
}
