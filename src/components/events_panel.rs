//! Community Events Panel
//!
//! Upcoming approved events, the submission form and RSVPs.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::forms::{EventForm, RsvpForm};
use crate::render::render_list;
use crate::store::{use_app_store, AppStateStoreFields};
use super::alert;

const APPROVAL_PENDING_MESSAGE: &str = "Submitted! An admin must approve it before it appears.";

#[component]
pub fn EventsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let form = RwSignal::new(EventForm::default());

    Effect::new(move |_| {
        let _ = ctx.events_trigger.get();
        let config = ctx.config();
        spawn_local(async move {
            match api::list_upcoming_events(&config).await {
                Ok(loaded) => *store.events().write() = loaded,
                Err(e) => log::debug!("[EVENTS] Ignoring load failure: {}", e),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let config = ctx.config();
        let payload = match form.get_untracked().to_payload(&config.city, &Local) {
            Ok(payload) => payload,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };
        spawn_local(async move {
            match api::submit_event(&config, &payload).await {
                Ok(_) => {
                    form.set(EventForm::default());
                    alert(APPROVAL_PENDING_MESSAGE);
                    ctx.reload_events();
                }
                Err(e) => log::error!("[EVENTS] Failed to submit event: {}", e),
            }
        });
    };

    let events_html = move || render_list(&store.events().get());

    view! {
        <section class="panel events-panel">
            <h2>"Community Events"</h2>
            <div id="events-list" class="card-list" inner_html=events_html></div>

            <h3>"Submit an event"</h3>
            <form class="event-form" on:submit=on_submit>
                <input
                    id="e_title"
                    type="text"
                    placeholder="Title"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
                <input
                    id="e_venue"
                    type="text"
                    placeholder="Venue"
                    prop:value=move || form.with(|f| f.venue.clone())
                    on:input=move |ev| form.update(|f| f.venue = event_target_value(&ev))
                />
                <label>
                    "Starts "
                    <input
                        id="e_start"
                        type="datetime-local"
                        prop:value=move || form.with(|f| f.starts_at.clone())
                        on:input=move |ev| form.update(|f| f.starts_at = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Ends "
                    <input
                        id="e_end"
                        type="datetime-local"
                        prop:value=move || form.with(|f| f.ends_at.clone())
                        on:input=move |ev| form.update(|f| f.ends_at = event_target_value(&ev))
                    />
                </label>
                <input
                    id="e_contact"
                    type="text"
                    placeholder="Host contact"
                    prop:value=move || form.with(|f| f.host_contact.clone())
                    on:input=move |ev| form.update(|f| f.host_contact = event_target_value(&ev))
                />
                <textarea
                    id="e_desc"
                    placeholder="Description"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
                <button id="e_submit" type="submit">"Submit for approval"</button>
            </form>

            <RsvpSection />
        </section>
    }
}

/// RSVP to one of the loaded events
#[component]
fn RsvpSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (event_id, set_event_id) = signal::<Option<u32>>(None);
    let form = RwSignal::new(RsvpForm::default());
    let (confirmation, set_confirmation) = signal::<Option<String>>(None);

    let on_rsvp = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = event_id.get_untracked() else {
            alert("Choose an event first.");
            return;
        };
        let payload = match form.get_untracked().to_payload(id) {
            Ok(payload) => payload,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };
        let config = ctx.config();
        spawn_local(async move {
            match api::create_rsvp(&config, &payload).await {
                Ok(rsvp) => {
                    set_confirmation.set(Some(format!("RSVP saved for {} ({} attending)", rsvp.name, rsvp.count)));
                    form.set(RsvpForm::default());
                }
                Err(e) => log::error!("[EVENTS] Failed to RSVP for event #{}: {}", id, e),
            }
        });
    };

    view! {
        <Show when=move || !store.events().get().is_empty()>
            <form class="rsvp-form" on:submit=on_rsvp>
                <h3>"RSVP"</h3>
                <select on:change=move |ev| set_event_id.set(event_target_value(&ev).parse().ok())>
                    <option value="">"Choose an event"</option>
                    <For
                        each=move || store.events().get()
                        key=|event| event.id
                        children=move |event| view! {
                            <option value=event.id.to_string()>{event.title.clone()}</option>
                        }
                    />
                </select>
                <input
                    type="text"
                    placeholder="Your name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email (optional)"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <input
                    type="number"
                    min="1"
                    placeholder="Party size"
                    prop:value=move || form.with(|f| f.count.clone())
                    on:input=move |ev| form.update(|f| f.count = event_target_value(&ev))
                />
                <button type="submit">"RSVP"</button>
                {move || confirmation.get().map(|msg| view! { <p class="confirmation">{msg}</p> })}
            </form>
        </Show>
    }
}
