//! In-memory `ItemsApi` for tests
//!
//! Records every call and answers from scripted responses.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::ItemsApi;
use crate::error::{ApiOp, RequestError, RequestFailure};
use crate::models::{Item, NewItem};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(NewItem),
    Delete(i64),
}

#[derive(Default)]
struct Script {
    calls: Vec<Call>,
    lists: VecDeque<Result<Vec<Item>, u16>>,
    creates: VecDeque<Result<Item, u16>>,
    deletes: VecDeque<Result<(), u16>>,
}

/// Unscripted calls fail with HTTP 500
#[derive(Default)]
pub struct FakeItemsApi {
    script: Mutex<Script>,
}

impl FakeItemsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, response: Result<Vec<Item>, u16>) -> &Self {
        self.script.lock().unwrap().lists.push_back(response);
        self
    }

    pub fn push_create(&self, response: Result<Item, u16>) -> &Self {
        self.script.lock().unwrap().creates.push_back(response);
        self
    }

    pub fn push_delete(&self, response: Result<(), u16>) -> &Self {
        self.script.lock().unwrap().deletes.push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.lock().unwrap().calls.clone()
    }

    fn record<T>(
        &self,
        call: Call,
        op: ApiOp,
        pick: impl FnOnce(&mut Script) -> Option<Result<T, u16>>,
    ) -> Result<T, RequestError> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(call);
        pick(&mut script)
            .unwrap_or(Err(500))
            .map_err(|status| RequestError::new(op, RequestFailure::Status(status)))
    }
}

#[async_trait(?Send)]
impl ItemsApi for FakeItemsApi {
    async fn list_items(&self) -> Result<Vec<Item>, RequestError> {
        self.record(Call::List, ApiOp::List, |s| s.lists.pop_front())
    }

    async fn create_item(&self, item: &NewItem) -> Result<Item, RequestError> {
        self.record(Call::Create(item.clone()), ApiOp::Create, |s| s.creates.pop_front())
    }

    async fn delete_item(&self, id: i64) -> Result<(), RequestError> {
        self.record(Call::Delete(id), ApiOp::Delete, |s| s.deletes.pop_front())
    }
}
