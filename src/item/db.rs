//! Database operations for items.

use std::str::FromStr;

use rusqlite::{Connection, OptionalExtension, Row, types::Type};

use crate::{
    Error,
    item::{Department, Item, ItemId, ItemStore, NewItem},
};

impl ItemStore for Connection {
    fn find_by_name(&self, name: &str) -> Result<Option<Item>, Error> {
        self.prepare(
            "SELECT id, name, quantity, department FROM item WHERE name = :name COLLATE NOCASE;",
        )?
        .query_row(&[(":name", name)], map_row)
        .optional()
        .map_err(|error| error.into())
    }

    fn insert(&self, item: NewItem) -> Result<Item, Error> {
        self.execute(
            "INSERT INTO item (name, quantity, department) VALUES (?1, ?2, ?3);",
            (&item.name, item.quantity, item.department.label()),
        )?;

        let id = self.last_insert_rowid();

        Ok(Item {
            id,
            name: item.name,
            quantity: item.quantity,
            department: item.department,
        })
    }

    fn update_quantity(&self, id: ItemId, quantity: i64) -> Result<(), Error> {
        let rows_affected =
            self.execute("UPDATE item SET quantity = ?1 WHERE id = ?2", (quantity, id))?;

        if rows_affected == 0 {
            return Err(Error::UpdateMissingItem);
        }

        Ok(())
    }

    fn delete(&self, id: ItemId) -> Result<(), Error> {
        let rows_affected = self.execute("DELETE FROM item WHERE id = ?1", [id])?;

        if rows_affected == 0 {
            return Err(Error::DeleteMissingItem);
        }

        Ok(())
    }

    fn delete_all(&self) -> Result<(), Error> {
        self.execute("DELETE FROM item", [])?;

        Ok(())
    }

    fn get_all(&self) -> Result<Vec<Item>, Error> {
        self.prepare(
            "SELECT id, name, quantity, department FROM item ORDER BY department ASC, name ASC;",
        )?
        .query_map([], map_row)?
        .map(|maybe_item| maybe_item.map_err(|error| error.into()))
        .collect()
    }
}

/// Initialize the item table and indexes.
pub fn create_item_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS item (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE COLLATE NOCASE,
            quantity INTEGER NOT NULL,
            department TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_item_department_name ON item(department, name);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Item, rusqlite::Error> {
    let id = row.get(0)?;
    let name = row.get(1)?;
    let quantity = row.get(2)?;
    let raw_department: String = row.get(3)?;
    let department = Department::from_str(&raw_department).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(error))
    })?;

    Ok(Item {
        id,
        name,
        quantity,
        department,
    })
}

#[cfg(test)]
mod item_store_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        item::{Department, ItemStore, NewItem},
    };

    use super::create_item_table;

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_item_table(&connection).expect("Could not create item table");
        connection
    }

    fn new_item(name: &str, quantity: i64, department: Department) -> NewItem {
        NewItem {
            name: name.to_owned(),
            quantity,
            department,
        }
    }

    #[test]
    fn insert_item_succeeds() {
        let connection = get_test_db_connection();

        let item = connection
            .insert(new_item("תפוח", 3, Department::Produce))
            .expect("Could not insert item");

        assert!(item.id > 0);
        assert_eq!(item.name, "תפוח");
        assert_eq!(item.quantity, 3);
        assert_eq!(item.department, Department::Produce);
    }

    #[test]
    fn find_by_name_ignores_case() {
        let connection = get_test_db_connection();
        let inserted = connection
            .insert(new_item("milk", 1, Department::Dairy))
            .expect("Could not insert item");

        let found = connection.find_by_name("MILK");

        assert_eq!(found, Ok(Some(inserted)));
    }

    #[test]
    fn find_by_name_returns_none_for_missing_item() {
        let connection = get_test_db_connection();

        assert_eq!(connection.find_by_name("תפוח"), Ok(None));
    }

    #[test]
    fn insert_duplicate_name_fails() {
        let connection = get_test_db_connection();
        connection
            .insert(new_item("Milk", 1, Department::Dairy))
            .expect("Could not insert item");

        let result = connection.insert(new_item("milk", 1, Department::Dairy));

        assert!(matches!(result, Err(Error::SqlError(_))));
    }

    #[test]
    fn update_quantity_succeeds() {
        let connection = get_test_db_connection();
        let item = connection
            .insert(new_item("תפוח", 3, Department::Produce))
            .expect("Could not insert item");

        connection
            .update_quantity(item.id, 7)
            .expect("Could not update item");

        let updated = connection.find_by_name("תפוח").unwrap().unwrap();
        assert_eq!(updated.quantity, 7);
        assert_eq!(updated.department, Department::Produce);
    }

    #[test]
    fn update_quantity_with_invalid_id_returns_error() {
        let connection = get_test_db_connection();

        assert_eq!(
            connection.update_quantity(999999, 1),
            Err(Error::UpdateMissingItem)
        );
    }

    #[test]
    fn delete_item_succeeds() {
        let connection = get_test_db_connection();
        let item = connection
            .insert(new_item("תפוח", 3, Department::Produce))
            .expect("Could not insert item");

        connection.delete(item.id).expect("Could not delete item");

        assert_eq!(connection.find_by_name("תפוח"), Ok(None));
    }

    #[test]
    fn delete_item_with_invalid_id_returns_error() {
        let connection = get_test_db_connection();

        assert_eq!(connection.delete(999999), Err(Error::DeleteMissingItem));
    }

    #[test]
    fn delete_all_empties_table() {
        let connection = get_test_db_connection();
        connection
            .insert(new_item("תפוח", 3, Department::Produce))
            .unwrap();
        connection.insert(new_item("לחם", 1, Department::Bakery)).unwrap();

        connection.delete_all().expect("Could not delete items");

        assert_eq!(connection.get_all(), Ok(vec![]));
    }

    #[test]
    fn get_all_orders_by_department_then_name() {
        let connection = get_test_db_connection();
        connection.insert(new_item("z", 1, Department::Other)).unwrap();
        connection.insert(new_item("לחם", 1, Department::Bakery)).unwrap();
        connection.insert(new_item("a", 1, Department::Other)).unwrap();

        let names: Vec<String> = connection
            .get_all()
            .expect("Could not get items")
            .into_iter()
            .map(|item| item.name)
            .collect();

        // "מאפים" sorts before "שונות".
        assert_eq!(names, vec!["לחם", "a", "z"]);
    }
}
