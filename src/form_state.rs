//! Item Form State
//!
//! Input fields plus the `submitting`/`error` flags of the new-item form.

use leptos::prelude::*;

use crate::commands::ItemsApi;
use crate::error::{RequestError, ValidationError};
use crate::models::{Item, NewItem};

pub const CREATE_FAILED_MESSAGE: &str = "Failed to create item. Please try again.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormModel {
    pub title: String,
    pub description: String,
    /// A create request is in flight
    pub submitting: bool,
    /// Last validation or request failure, shown above the form
    pub error: Option<String>,
}

impl FormModel {
    pub fn validate(&self) -> Result<NewItem, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(NewItem {
            title: self.title.clone(),
            description: self.description.clone(),
            is_active: true,
        })
    }

    /// Returns the payload to send, or `None` if nothing should be sent
    pub fn begin_submit(&mut self) -> Option<NewItem> {
        if self.submitting {
            return None;
        }
        match self.validate() {
            Ok(new_item) => {
                self.submitting = true;
                Some(new_item)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Returns true if the item was created
    pub fn finish_submit(&mut self, result: Result<Item, RequestError>) -> bool {
        self.submitting = false;
        match result {
            Ok(_) => {
                self.title.clear();
                self.description.clear();
                self.error = None;
                true
            }
            Err(_) => {
                self.error = Some(CREATE_FAILED_MESSAGE.to_string());
                false
            }
        }
    }
}

/// Validate, create, and settle the form.
///
/// Returns true if the backend created the item, even when the form was
/// disposed while the request was in flight.
pub async fn submit_form(form: RwSignal<FormModel>, api: &dyn ItemsApi) -> bool {
    let Some(Some(new_item)) = form.try_update(FormModel::begin_submit) else {
        return false;
    };

    let result = api.create_item(&new_item).await;
    match &result {
        Ok(item) => log::info!("[ItemForm] Created item {}", item.id),
        Err(err) => log::error!("[ItemForm] {}", err),
    }

    let created = result.is_ok();
    // None once the form is gone; the late response is dropped
    let _ = form.try_update(|f| f.finish_submit(result));
    created
}
