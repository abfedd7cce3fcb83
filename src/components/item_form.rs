//! Item Form Component
//!
//! Title/description form that creates an item and tells the parent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_items_api;
use crate::form_state::{submit_form, FormModel};

/// Form for creating new items
///
/// # Arguments
/// * `on_item_added` - Called once after the backend confirms a create
#[component]
pub fn ItemForm(#[prop(into)] on_item_added: Callback<()>) -> impl IntoView {
    let api = use_items_api();
    let form = RwSignal::new(FormModel::default());
    let submitting = move || form.with(|f| f.submitting);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        spawn_local(async move {
            if submit_form(form, api.as_ref()).await {
                on_item_added.run(());
            }
        });
    };

    view! {
        <div class="item-form-card">
            <h2>"Add New Item"</h2>

            {move || form.with(|f| f.error.clone()).map(|msg| view! {
                <div class="error-banner">{msg}</div>
            })}

            <form class="item-form" on:submit=on_submit>
                <label for="title">"Title *"</label>
                <input
                    type="text"
                    id="title"
                    placeholder="Enter title"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    disabled=submitting
                />

                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    placeholder="Enter description"
                    rows="3"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    disabled=submitting
                ></textarea>

                <button type="submit" class="primary-btn" disabled=submitting>
                    {move || if submitting() { "Adding..." } else { "Add Item" }}
                </button>
            </form>
        </div>
    }
}
