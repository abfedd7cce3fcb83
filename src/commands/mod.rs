//! Items Backend Bindings
//!
//! Frontend bindings to the REST items backend, behind the `ItemsApi` trait
//! so components can be driven by a fake in tests.

mod item;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::{ApiOp, RequestError, RequestFailure};
use crate::models::{Item, NewItem};

pub use item::HttpItemsApi;

/// Operations the UI needs from the items backend.
///
/// Each call is exactly one round trip: no retries, no caching.
/// Futures are not `Send`; everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait ItemsApi: Send + Sync {
    /// GET /items
    async fn list_items(&self) -> Result<Vec<Item>, RequestError>;

    /// POST /items
    async fn create_item(&self, item: &NewItem) -> Result<Item, RequestError>;

    /// DELETE /items/{id}
    async fn delete_item(&self, id: i64) -> Result<(), RequestError>;
}

// ========================
// reqwest plumbing
// ========================

fn request_error(op: ApiOp, err: reqwest::Error) -> RequestError {
    let cause = if err.is_decode() {
        RequestFailure::Decode(err.to_string())
    } else if let Some(status) = err.status() {
        RequestFailure::Status(status.as_u16())
    } else {
        RequestFailure::Network(err.to_string())
    };
    RequestError::new(op, cause)
}

/// Send one request and fail on any non-2xx status
async fn send(op: ApiOp, request: RequestBuilder) -> Result<Response, RequestError> {
    let response = request
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| request_error(op, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(RequestError::new(op, RequestFailure::Status(status.as_u16())));
    }
    Ok(response)
}

/// Parse a response body as JSON into `T`
async fn read_json<T: DeserializeOwned>(op: ApiOp, response: Response) -> Result<T, RequestError> {
    response.json::<T>().await.map_err(|e| request_error(op, e))
}
