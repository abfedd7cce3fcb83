//! Item List State
//!
//! Fetched items, load generation, and per-item delete bookkeeping.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::ItemsApi;
use crate::error::RequestError;
use crate::models::{newest_first, Item};
use crate::request_state::RequestState;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load items. Please try again later.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete item";

/// What the list renders; exactly one at a time
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loading,
    Error(String),
    Empty,
    Items(Vec<Item>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListModel {
    pub items: RequestState<Vec<Item>>,
    /// Bumped by every load; responses for older loads are dropped
    generation: u64,
    /// Ids with a DELETE in flight
    deleting: Vec<i64>,
    /// Last delete failure, shown above the still-rendered list
    pub delete_error: Option<String>,
}

impl ListModel {
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.items = RequestState::Pending;
        self.deleting.clear();
        self.delete_error = None;
        self.generation
    }

    /// Returns false if the response belongs to a superseded load
    pub fn finish_load(
        &mut self,
        generation: u64,
        result: Result<Vec<Item>, RequestError>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.items = match result {
            Ok(items) => RequestState::Succeeded(newest_first(items)),
            Err(_) => RequestState::Failed(LOAD_FAILED_MESSAGE.to_string()),
        };
        true
    }

    /// Returns false if the delete should not be sent
    pub fn begin_delete(&mut self, id: i64) -> bool {
        let shown = self
            .items
            .value()
            .is_some_and(|items| items.iter().any(|item| item.id == id));
        if !shown || self.is_deleting(id) {
            return false;
        }
        self.deleting.push(id);
        true
    }

    pub fn finish_delete(&mut self, id: i64, result: Result<(), RequestError>) {
        self.deleting.retain(|pending| *pending != id);
        match result {
            Ok(()) => {
                if let Some(items) = self.items.value_mut() {
                    items.retain(|item| item.id != id);
                }
                self.delete_error = None;
            }
            Err(_) => self.delete_error = Some(DELETE_FAILED_MESSAGE.to_string()),
        }
    }

    pub fn is_deleting(&self, id: i64) -> bool {
        self.deleting.contains(&id)
    }

    pub fn view(&self) -> ListView {
        match &self.items {
            RequestState::Idle | RequestState::Pending => ListView::Loading,
            RequestState::Failed(msg) => ListView::Error(msg.clone()),
            RequestState::Succeeded(items) if items.is_empty() => ListView::Empty,
            RequestState::Succeeded(items) => ListView::Items(items.clone()),
        }
    }
}

/// Fetch all items into the list
pub async fn load_items(list: RwSignal<ListModel>, api: &dyn ItemsApi) {
    let Some(generation) = list.try_update(ListModel::begin_load) else {
        return;
    };

    let result = api.list_items().await;
    match &result {
        Ok(items) => log::debug!("[ItemList] Loaded {} items (load #{})", items.len(), generation),
        Err(err) => log::error!("[ItemList] {}", err),
    }

    if list.try_update(|l| l.finish_load(generation, result)) == Some(false) {
        log::debug!("[ItemList] Dropped stale response for load #{}", generation);
    }
}

/// Load now, and again every time `refresh` changes
pub fn watch_refresh(
    refresh: ReadSignal<u32>,
    list: RwSignal<ListModel>,
    api: Arc<dyn ItemsApi>,
) {
    Effect::new(move |_| {
        let trigger = refresh.get();
        log::debug!("[ItemList] Loading items, trigger={}", trigger);
        let api = api.clone();
        spawn_local(async move {
            load_items(list, api.as_ref()).await;
        });
    });
}

/// Delete one item and drop it from the local collection
pub async fn delete_item(list: RwSignal<ListModel>, api: &dyn ItemsApi, id: i64) {
    if list.try_update(|l| l.begin_delete(id)) != Some(true) {
        return;
    }

    let result = api.delete_item(id).await;
    match &result {
        Ok(()) => log::info!("[ItemList] Deleted item {}", id),
        Err(err) => log::error!("[ItemList] {}", err),
    }

    let _ = list.try_update(|l| l.finish_delete(id, result));
}
