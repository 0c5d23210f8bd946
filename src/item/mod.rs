//! Shopping list items: canonical names, departments and storage.

mod db;
mod department;
mod domain;
mod name;
mod store;

pub use db::create_item_table;
pub use department::{Department, classify};
pub use domain::{Item, ItemId, NewItem};
pub use name::normalize_name;
pub use store::ItemStore;
