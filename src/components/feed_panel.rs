//! News Feed Panel
//!
//! City/category filters, the load button and the feed list. On first
//! mount the backend is seeded when it has no items yet.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, FeedFilter, SeedDecision};
use crate::config::AppConfig;
use crate::context::use_app_context;
use crate::render::render_list;
use crate::store::{use_app_store, AppStateStoreFields};

/// Category filter options: (value, label)
const FEED_CATEGORIES: &[(&str, &str)] = &[
    ("", "All categories"),
    ("legislation", "Legislation"),
    ("agenda", "Agendas"),
    ("public_notice", "Public notices"),
    ("infrastructure", "Infrastructure"),
    ("safety", "Safety"),
    ("event", "Events"),
    ("news", "News"),
];

/// Probe the backend and seed it when it has no items yet
async fn seed_if_empty(config: &AppConfig) {
    let probe = api::probe_feed(config).await;
    match api::seed_decision(&probe) {
        SeedDecision::Seed => match api::seed_from_config(config).await {
            Ok(summary) => log::info!("[FEED] Seeded {} items from configured sources", summary.created),
            Err(e) => log::warn!("[FEED] Seed request failed: {}", e),
        },
        SeedDecision::Skip => {}
        SeedDecision::Unreachable => {
            if let Err(e) = probe {
                log::warn!("[FEED] API not reachable. Start backend first. ({})", e);
            }
        }
    }
}

#[component]
pub fn FeedPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (city, set_city) = signal(String::new());
    let (category, set_category) = signal(String::new());

    // Load on startup (after the seed check) and whenever the trigger is bumped
    Effect::new(move |_| {
        let trigger = ctx.feed_trigger.get();
        let config = ctx.config();
        let filter = FeedFilter {
            city: city.get_untracked(),
            category: category.get_untracked(),
            limit: Some(config.feed_limit),
        };
        // Claimed before spawning so a Load click during the probe cannot seed again
        let needs_seed = ctx.claim_seed();
        spawn_local(async move {
            if needs_seed {
                seed_if_empty(&config).await;
            }
            match api::list_items(&config, &filter).await {
                Ok(loaded) => {
                    log::info!("[FEED] Loaded {} items (trigger={})", loaded.len(), trigger);
                    *store.feed().write() = loaded;
                }
                Err(e) => log::warn!("[FEED] Failed to load items: {}", e),
            }
        });
    });

    let feed_html = move || render_list(&store.feed().get());

    view! {
        <section class="panel feed-panel">
            <h2>"Community Feed"</h2>
            <div class="filters">
                <input
                    id="city"
                    type="text"
                    placeholder="City (e.g. Knoxville, TN)"
                    prop:value=move || city.get()
                    on:input=move |ev| set_city.set(event_target_value(&ev))
                />
                <select
                    id="category"
                    prop:value=move || category.get()
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    {FEED_CATEGORIES.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
                <button id="load" on:click=move |_| ctx.reload_feed()>"Load"</button>
            </div>
            <ul id="feed" class="feed" inner_html=feed_html></ul>
        </section>
    }
}
