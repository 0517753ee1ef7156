//! Discussion Panel
//!
//! Comments on a chosen feed item.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::forms::CommentForm;
use crate::models::Comment;
use crate::render::render_list;
use crate::store::{use_app_store, AppStateStoreFields};
use super::alert;

#[component]
pub fn DiscussionPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (item_id, set_item_id) = signal::<Option<u32>>(None);
    let (comments, set_comments) = signal(Vec::<Comment>::new());
    let (reload, set_reload) = signal(0u32);
    let form = RwSignal::new(CommentForm::default());

    Effect::new(move |_| {
        let _ = reload.get();
        let Some(id) = item_id.get() else {
            set_comments.set(Vec::new());
            return;
        };
        let config = ctx.config();
        spawn_local(async move {
            match api::list_comments(&config, id).await {
                Ok(loaded) => set_comments.set(loaded),
                Err(e) => log::warn!("[FEED] Failed to load comments for item #{}: {}", id, e),
            }
        });
    });

    let on_comment = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = item_id.get_untracked() else { return };
        let payload = match form.get_untracked().to_payload(id) {
            Ok(payload) => payload,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };
        let config = ctx.config();
        spawn_local(async move {
            match api::create_comment(&config, &payload).await {
                Ok(_) => {
                    form.set(CommentForm::default());
                    set_reload.update(|v| *v += 1);
                }
                Err(e) => log::error!("[FEED] Failed to post comment on item #{}: {}", id, e),
            }
        });
    };

    view! {
        <section class="panel discussion-panel">
            <h2>"Discussion"</h2>
            <select on:change=move |ev| set_item_id.set(event_target_value(&ev).parse().ok())>
                <option value="">"Choose a feed item"</option>
                <For
                    each=move || store.feed().get()
                    key=|item| item.id
                    children=move |item| view! {
                        <option value=item.id.to_string()>{item.title.clone()}</option>
                    }
                />
            </select>
            <div class="card-list" inner_html=move || render_list(&comments.get())></div>
            <Show when=move || item_id.get().is_some()>
                <form class="comment-form" on:submit=on_comment>
                    <input
                        type="text"
                        placeholder="Name (optional)"
                        prop:value=move || form.with(|f| f.author.clone())
                        on:input=move |ev| form.update(|f| f.author = event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Add a comment"
                        prop:value=move || form.with(|f| f.body.clone())
                        on:input=move |ev| form.update(|f| f.body = event_target_value(&ev))
                    ></textarea>
                    <button type="submit">"Comment"</button>
                </form>
            </Show>
        </section>
    }
}
