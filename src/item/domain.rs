//! Core item domain types.

use crate::item::Department;

/// Database identifier for an item.
pub type ItemId = i64;

/// An entry on the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    /// The ID of the item in the database.
    pub id: ItemId,

    /// The canonical name of the item, see [crate::item::normalize_name].
    pub name: String,

    /// How many units of the item are still needed.
    pub quantity: i64,

    /// The department the item was classified into when it was first added.
    pub department: Department,
}

/// An item that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    /// The canonical name of the item.
    pub name: String,
    /// How many units of the item are needed.
    pub quantity: i64,
    /// The department of the item.
    pub department: Department,
}
