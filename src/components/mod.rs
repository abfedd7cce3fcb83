//! UI Components
//!
//! Leptos components for the item manager page.

mod item_card;
mod item_form;
mod item_list;

pub use item_card::ItemCard;
pub use item_form::ItemForm;
pub use item_list::ItemList;
