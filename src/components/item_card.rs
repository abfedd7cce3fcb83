//! Item Card Component
//!
//! One row of the item list.

use leptos::prelude::*;

use crate::models::Item;

#[component]
pub fn ItemCard(
    item: Item,
    #[prop(into)] deleting: Signal<bool>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = item.id;
    let created = item.created_label();
    let completed = item.completed_label();

    view! {
        <li class="item-card">
            <div class="item-body">
                <h3 class="item-title">{item.title}</h3>
                <p class="item-description">{item.description}</p>
                <div class="item-meta">"Created: " {created}</div>
                {completed.map(|label| view! {
                    <div class="item-meta">"Completed: " {label}</div>
                })}
            </div>
            <button
                class="delete-btn"
                disabled=move || deleting.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_delete.run(id);
                }
            >
                "Delete"
            </button>
        </li>
    }
}
