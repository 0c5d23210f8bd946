//! Creates the tables the application needs.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, item::create_item_table};

/// Create any missing tables.
///
/// Safe to call on a database that has already been initialized.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_item_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
