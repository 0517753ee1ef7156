//! Marketplace Panel
//!
//! Active listings for the configured city and the "post a listing" form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::forms::ListingForm;
use crate::render::render_list;
use crate::store::{use_app_store, AppStateStoreFields};
use super::alert;

#[component]
pub fn MarketplacePanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let form = RwSignal::new(ListingForm::default());

    // Best-effort loader: failures leave the previous cards in place
    Effect::new(move |_| {
        let _ = ctx.marketplace_trigger.get();
        let config = ctx.config();
        spawn_local(async move {
            match api::list_listings(&config).await {
                Ok(loaded) => *store.listings().write() = loaded,
                Err(e) => log::debug!("[MARKET] Ignoring load failure: {}", e),
            }
        });
    });

    let on_post = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let config = ctx.config();
        let payload = match form.get_untracked().to_payload(&config.city) {
            Ok(payload) => payload,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };
        spawn_local(async move {
            match api::create_listing(&config, &payload).await {
                Ok(created) => {
                    log::info!("[MARKET] Posted listing #{}", created.id);
                    form.set(ListingForm::default());
                    ctx.reload_marketplace();
                }
                Err(e) => log::error!("[MARKET] Failed to post listing: {}", e),
            }
        });
    };

    let listings_html = move || render_list(&store.listings().get());

    view! {
        <section class="panel marketplace-panel">
            <h2>"Marketplace"</h2>
            <form class="listing-form" on:submit=on_post>
                <input
                    id="m_title"
                    type="text"
                    placeholder="Title"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
                <input
                    id="m_price"
                    type="number"
                    step="0.01"
                    placeholder="Price"
                    prop:value=move || form.with(|f| f.price.clone())
                    on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                />
                <select
                    id="m_category"
                    prop:value=move || form.with(|f| f.category.clone())
                    on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                >
                    <option value="for_sale">"For sale"</option>
                    <option value="free">"Free"</option>
                    <option value="wanted">"Wanted"</option>
                    <option value="services">"Services"</option>
                    <option value="housing">"Housing"</option>
                </select>
                <input
                    id="m_contact"
                    type="text"
                    placeholder="Contact (email or phone)"
                    prop:value=move || form.with(|f| f.contact.clone())
                    on:input=move |ev| form.update(|f| f.contact = event_target_value(&ev))
                />
                <textarea
                    id="m_desc"
                    placeholder="Description"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
                <button id="m_post" type="submit">"Post listing"</button>
            </form>
            <div id="market-list" class="card-list" inner_html=listings_html></div>
        </section>
    }
}
