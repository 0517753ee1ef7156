//! Government Directory Panel
//!
//! Incumbents for the configured jurisdiction and candidates, optionally
//! narrowed to one race. Both lists load on demand.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::forms::parse_race_id;
use crate::render::render_list;
use crate::store::{use_app_store, AppStateStoreFields};
use super::alert;

#[component]
pub fn DirectoryPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (race_id, set_race_id) = signal(String::new());

    // Races only feed the picker; a failure just leaves it empty
    Effect::new(move |_| {
        let config = ctx.config();
        spawn_local(async move {
            match api::list_races(&config).await {
                Ok(races) => *store.races().write() = races,
                Err(e) => log::debug!("[DIRECTORY] Ignoring race load failure: {}", e),
            }
        });
    });

    let load_incumbents = move |_: web_sys::MouseEvent| {
        let config = ctx.config();
        spawn_local(async move {
            match api::list_incumbents(&config).await {
                Ok(loaded) => {
                    log::info!("[DIRECTORY] Loaded {} incumbents", loaded.len());
                    *store.incumbents().write() = loaded;
                }
                Err(e) => log::error!("[DIRECTORY] Failed to load incumbents: {}", e),
            }
        });
    };

    let load_candidates = move |_: web_sys::MouseEvent| {
        let race = match parse_race_id(&race_id.get_untracked()) {
            Ok(race) => race,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };
        let config = ctx.config();
        spawn_local(async move {
            match api::list_candidates(&config, race).await {
                Ok(loaded) => {
                    log::info!("[DIRECTORY] Loaded {} candidates (race={:?})", loaded.len(), race);
                    *store.candidates().write() = loaded;
                }
                Err(e) => log::error!("[DIRECTORY] Failed to load candidates: {}", e),
            }
        });
    };

    let incumbents_rss = move || api::incumbents_rss_url(&ctx.config());
    let candidates_rss = move || {
        let race = parse_race_id(&race_id.get()).ok().flatten();
        api::candidates_rss_url(&ctx.config(), race)
    };
    let races_rss = move || api::races_rss_url(&ctx.config());

    view! {
        <section class="panel directory-panel">
            <h2>"Your Representatives"</h2>
            <div class="directory-row">
                <button id="load_incumbents" on:click=load_incumbents>"Load incumbents"</button>
                <a class="rss-link" href=incumbents_rss target="_blank" rel="noopener">"RSS"</a>
            </div>
            <div id="incumbent-list" class="card-list" inner_html=move || render_list(&store.incumbents().get())></div>

            <h2>"Candidates"</h2>
            <div class="directory-row">
                <select on:change=move |ev| set_race_id.set(event_target_value(&ev))>
                    <option value="">"All races"</option>
                    <For
                        each=move || store.races().get()
                        key=|race| race.id
                        children=move |race| view! {
                            <option value=race.id.to_string()>{race.name.clone()}</option>
                        }
                    />
                </select>
                <input
                    id="race_id"
                    type="text"
                    inputmode="numeric"
                    placeholder="Race id"
                    prop:value=move || race_id.get()
                    on:input=move |ev| set_race_id.set(event_target_value(&ev))
                />
                <button id="load_candidates" on:click=load_candidates>"Load candidates"</button>
                <a class="rss-link" href=candidates_rss target="_blank" rel="noopener">"RSS"</a>
                <a class="rss-link" href=races_rss target="_blank" rel="noopener">"Races RSS"</a>
            </div>
            <div id="candidate-list" class="card-list" inner_html=move || render_list(&store.candidates().get())></div>
        </section>
    }
}
