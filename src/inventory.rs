//! The shopping list inventory and its aggregation rules.

use crate::{
    Error,
    item::{Department, Item, ItemStore, NewItem, classify, normalize_name},
};

/// The items of a single department, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentItems {
    /// The department shared by all of `items`.
    pub department: Department,
    /// The items in the department.
    pub items: Vec<Item>,
}

/// The shopping list, backed by an [ItemStore].
///
/// Item names are normalized with [normalize_name] before they are looked up,
/// so "תפוחים" and "תפוח" refer to the same item.
#[derive(Debug)]
pub struct Inventory<'a, S: ItemStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: ItemStore + ?Sized> Inventory<'a, S> {
    /// Create an inventory over `store`.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Add `quantity` units of an item, returning the stored item.
    ///
    /// If the item is already on the list the quantities are summed, otherwise
    /// the item is classified into a department and inserted. The quantity is
    /// not validated.
    pub fn add(&self, raw_name: &str, quantity: i64) -> Result<Item, Error> {
        let name = normalize_name(raw_name);

        match self.store.find_by_name(&name)? {
            Some(mut item) => {
                item.quantity = item.quantity.saturating_add(quantity);
                self.store.update_quantity(item.id, item.quantity)?;
                tracing::debug!("Increased '{}' to {}", item.name, item.quantity);

                Ok(item)
            }
            None => {
                let department = classify(&name);
                tracing::debug!("Adding new item '{name}' to {department}");

                self.store.insert(NewItem {
                    name,
                    quantity,
                    department,
                })
            }
        }
    }

    /// Remove `quantity` units of an item.
    ///
    /// The item is deleted once its quantity drops to zero or below. Removing
    /// an item that is not on the list does nothing.
    ///
    /// Returns the item with its remaining quantity, or `None` if the item is
    /// no longer on the list.
    pub fn partial_remove(&self, raw_name: &str, quantity: i64) -> Result<Option<Item>, Error> {
        let name = normalize_name(raw_name);

        let Some(mut item) = self.store.find_by_name(&name)? else {
            tracing::debug!("Ignoring removal of '{name}', it is not on the list");
            return Ok(None);
        };

        let remaining = item.quantity.saturating_sub(quantity);
        if remaining > 0 {
            self.store.update_quantity(item.id, remaining)?;
            item.quantity = remaining;
            tracing::debug!("Decreased '{}' to {}", item.name, item.quantity);

            Ok(Some(item))
        } else {
            self.store.delete(item.id)?;
            tracing::debug!("Deleted '{}' from the list", item.name);

            Ok(None)
        }
    }

    /// Remove every item from the list.
    pub fn clear_all(&self) -> Result<(), Error> {
        self.store.delete_all()
    }

    /// Get the items on the list grouped by department.
    ///
    /// Only departments with items are included. Departments are sorted by
    /// their label and the items within a department by name.
    pub fn list_all(&self) -> Result<Vec<DepartmentItems>, Error> {
        let mut items = self.store.get_all()?;
        items.sort_by(|a, b| {
            a.department
                .label()
                .cmp(b.department.label())
                .then_with(|| a.name.cmp(&b.name))
        });

        let mut groups: Vec<DepartmentItems> = Vec::new();
        for item in items {
            match groups.last_mut() {
                Some(group) if group.department == item.department => group.items.push(item),
                _ => groups.push(DepartmentItems {
                    department: item.department,
                    items: vec![item],
                }),
            }
        }

        Ok(groups)
    }
}
