//! Item Manager App
//!
//! Page container: form toggle and list refresh signal.

use std::sync::Arc;

use leptos::prelude::*;

use crate::commands::HttpItemsApi;
use crate::components::{ItemForm, ItemList};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::info!("[APP] Using items backend at {}", config.api_base_url);
    provide_context(AppContext::new(Arc::new(HttpItemsApi::new(config))));

    // State
    let (show_form, set_show_form) = signal(false);
    let (refresh, set_refresh) = signal(0u32);

    // Only the form's success path bumps the refresh counter
    let on_item_added = refresh_notifier(set_refresh);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Item Manager"</h1>
                <p class="tagline">"Manage your items with ease"</p>
            </header>

            <div class="form-toggle-row">
                <button
                    class="primary-btn"
                    on:click=move |_| set_show_form.update(|v| *v = !*v)
                >
                    {move || if show_form.get() { "Hide Form" } else { "Add New Item" }}
                </button>
            </div>

            <Show when=move || show_form.get()>
                <ItemForm on_item_added=on_item_added />
            </Show>

            <ItemList refresh=refresh />
        </div>
    }
}

/// Callback that bumps the list's refresh counter by one per call
pub fn refresh_notifier(set_refresh: WriteSignal<u32>) -> Callback<()> {
    Callback::new(move |_: ()| {
        set_refresh.update(|v| *v += 1);
        log::debug!("[APP] Item added, refresh requested");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fake::{Call, FakeItemsApi};
    use crate::commands::ItemsApi;
    use crate::form_state::{submit_form, FormModel};
    use crate::list_state::{watch_refresh, ListModel, ListView};
    use crate::models::make_item;
    use any_spawner::Executor;
    use tokio::task::LocalSet;

    /// Let effects and spawned loads run to completion
    async fn settle() {
        for _ in 0..8 {
            Executor::tick().await;
        }
    }

    fn list_calls(api: &FakeItemsApi) -> usize {
        api.calls().iter().filter(|c| **c == Call::List).count()
    }

    #[tokio::test]
    async fn test_successful_create_refreshes_list_once() {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let created = make_item(1, "Buy milk", "2024-01-01T00:00:00Z");
                let fake = Arc::new(FakeItemsApi::new());
                fake.push_list(Ok(Vec::new()))
                    .push_create(Ok(created.clone()))
                    .push_list(Ok(vec![created]));
                let api: Arc<dyn ItemsApi> = fake.clone();

                let (refresh, set_refresh) = signal(0u32);
                let on_item_added = refresh_notifier(set_refresh);
                let list = RwSignal::new(ListModel::default());
                let form = RwSignal::new(FormModel {
                    title: "Buy milk".into(),
                    ..Default::default()
                });

                watch_refresh(refresh, list, api.clone());
                settle().await;
                assert_eq!(list_calls(&fake), 1);
                assert_eq!(list.with_untracked(ListModel::view), ListView::Empty);

                // Same wiring as ItemForm's submit handler
                if submit_form(form, api.as_ref()).await {
                    on_item_added.run(());
                }
                settle().await;

                assert_eq!(refresh.get_untracked(), 1);
                assert_eq!(list_calls(&fake), 2);
                match list.with_untracked(ListModel::view) {
                    ListView::Items(items) => assert_eq!(items[0].title, "Buy milk"),
                    other => panic!("expected items, got {:?}", other),
                }
            })
            .await;
    }

    #[tokio::test]
    async fn test_failed_create_does_not_refresh() {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let fake = Arc::new(FakeItemsApi::new());
                fake.push_list(Ok(Vec::new())).push_create(Err(500));
                let api: Arc<dyn ItemsApi> = fake.clone();

                let (refresh, set_refresh) = signal(0u32);
                let on_item_added = refresh_notifier(set_refresh);
                let list = RwSignal::new(ListModel::default());
                let form = RwSignal::new(FormModel {
                    title: "Buy milk".into(),
                    ..Default::default()
                });

                watch_refresh(refresh, list, api.clone());
                settle().await;

                if submit_form(form, api.as_ref()).await {
                    on_item_added.run(());
                }
                settle().await;

                assert_eq!(refresh.get_untracked(), 0);
                assert_eq!(list_calls(&fake), 1);
            })
            .await;
    }
}
