use std::{error::Error, io};

use clap::Parser;
use rusqlite::Connection;

use shopping_list_bot::{initialize_db, reply_to_message};

/// Apply a message to a shopping list database and print the reply, without
/// going through a messaging provider.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: String,

    /// The lines of the message. Read from stdin when omitted.
    lines: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let body = if args.lines.is_empty() {
        io::read_to_string(io::stdin())?
    } else {
        args.lines.join("\n")
    };

    let mut conn = Connection::open(&args.db_path)?;
    initialize_db(&conn)?;

    println!("{}", reply_to_message(&body, &mut conn)?);

    Ok(())
}
