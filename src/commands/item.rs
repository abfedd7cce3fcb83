//! Item Commands
//!
//! `ItemsApi` over reqwest (browser fetch on wasm32).

use async_trait::async_trait;
use reqwest::Client;

use super::{read_json, send, ItemsApi};
use crate::config::AppConfig;
use crate::error::{ApiOp, RequestError};
use crate::models::{Item, NewItem};

/// Talks to the REST backend at `config.api_base_url`
#[derive(Debug, Clone)]
pub struct HttpItemsApi {
    config: AppConfig,
    client: Client,
}

impl HttpItemsApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config, client: Client::new() }
    }
}

#[async_trait(?Send)]
impl ItemsApi for HttpItemsApi {
    async fn list_items(&self) -> Result<Vec<Item>, RequestError> {
        let url = self.config.items_url();
        log::debug!("[API] GET {}", url);
        let response = send(ApiOp::List, self.client.get(&url)).await?;
        read_json(ApiOp::List, response).await
    }

    async fn create_item(&self, item: &NewItem) -> Result<Item, RequestError> {
        let url = self.config.items_url();
        log::debug!("[API] POST {} {:?}", url, item);
        let response = send(ApiOp::Create, self.client.post(&url).json(item)).await?;
        read_json(ApiOp::Create, response).await
    }

    async fn delete_item(&self, id: i64) -> Result<(), RequestError> {
        let url = self.config.item_url(id);
        log::debug!("[API] DELETE {}", url);
        // Response body (if any) is not used
        send(ApiOp::Delete, self.client.delete(&url)).await?;
        Ok(())
    }
}
