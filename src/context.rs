//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::commands::ItemsApi;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Backend used by every component
    pub api: Arc<dyn ItemsApi>,
}

impl AppContext {
    pub fn new(api: Arc<dyn ItemsApi>) -> Self {
        Self { api }
    }
}

/// Get the items backend from context
pub fn use_items_api() -> Arc<dyn ItemsApi> {
    expect_context::<AppContext>().api
}
