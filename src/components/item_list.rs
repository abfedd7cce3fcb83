//! Item List Component
//!
//! Fetches items on mount and on every refresh signal, renders them newest
//! first, and deletes them in place.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ItemCard;
use crate::context::use_items_api;
use crate::list_state::{delete_item, watch_refresh, ListModel, ListView};

#[component]
pub fn ItemList(
    /// Changes whenever the list should re-fetch
    refresh: ReadSignal<u32>,
) -> impl IntoView {
    let api = use_items_api();
    let list = RwSignal::new(ListModel::default());

    // Load on mount and when the trigger changes
    watch_refresh(refresh, list, api.clone());

    let on_delete = Callback::new(move |id: i64| {
        let api = api.clone();
        spawn_local(async move {
            delete_item(list, api.as_ref(), id).await;
        });
    });

    move || match list.with(ListModel::view) {
        ListView::Loading => view! { <div class="list-status">"Loading items..."</div> }.into_any(),
        ListView::Error(msg) => view! { <div class="list-status error">{msg}</div> }.into_any(),
        ListView::Empty => {
            view! { <div class="list-status">"No items found. Add some!"</div> }.into_any()
        }
        ListView::Items(items) => view! {
            <div class="item-list">
                <h2>"Your Items"</h2>
                {move || list.with(|l| l.delete_error.clone()).map(|msg| view! {
                    <div class="error-banner">{msg}</div>
                })}
                <ul>
                    {items.into_iter().map(|item| {
                        let id = item.id;
                        let deleting = Signal::derive(move || list.with(|l| l.is_deleting(id)));
                        view! { <ItemCard item=item deleting=deleting on_delete=on_delete /> }
                    }).collect_view()}
                </ul>
            </div>
        }.into_any(),
    }
}
