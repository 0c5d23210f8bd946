//! Defines the item store trait.

use crate::{
    Error,
    item::{Item, ItemId, NewItem},
};

/// Persists shopping list items keyed by their canonical name.
pub trait ItemStore {
    /// Find an item by its canonical name, ignoring case.
    fn find_by_name(&self, name: &str) -> Result<Option<Item>, Error>;

    /// Add a new item to the store.
    fn insert(&self, item: NewItem) -> Result<Item, Error>;

    /// Set the quantity of an existing item.
    fn update_quantity(&self, id: ItemId, quantity: i64) -> Result<(), Error>;

    /// Remove an item from the store.
    fn delete(&self, id: ItemId) -> Result<(), Error>;

    /// Remove every item from the store.
    fn delete_all(&self) -> Result<(), Error>;

    /// Get every item ordered by department name and then item name.
    fn get_all(&self) -> Result<Vec<Item>, Error>;
}
