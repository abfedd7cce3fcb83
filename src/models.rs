//! Frontend Models
//!
//! Data structures matching the items REST backend.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub modified_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl Item {
    /// Creation time in the browser's local time zone
    pub fn created_label(&self) -> String {
        format_timestamp(&self.created_date, &Local)
    }

    pub fn completed_label(&self) -> Option<String> {
        self.completed_date.as_ref().map(|dt| format_timestamp(dt, &Local))
    }
}

/// Payload for creating an item; the server assigns id and createdDate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub is_active: bool,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn format_timestamp<Tz>(dt: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    dt.with_timezone(tz).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Items newest first.
///
/// The sort is stable, so items sharing a `created_date` keep fetch order.
pub fn newest_first(mut items: Vec<Item>) -> Vec<Item> {
    items.sort_by(|a, b| b.created_date.cmp(&a.created_date));
    items
}

#[cfg(test)]
pub(crate) fn make_item(id: i64, title: &str, created: &str) -> Item {
    Item {
        id,
        title: title.to_string(),
        description: String::new(),
        created_date: created.parse().expect("valid RFC 3339 timestamp"),
        modified_date: None,
        completed_date: None,
        is_active: true,
    }
}
