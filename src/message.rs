//! Applies a whole chat message to the shopping list and builds the reply.

use rusqlite::Connection;

use crate::{
    Error,
    command::{Command, parse_line},
    inventory::Inventory,
    item::{ItemStore, normalize_name},
    listing::render_listing,
};

/// A message consisting of just this word shows the usage instructions.
const HELP_KEYWORD: &str = "עזרה";

/// A message consisting of just this phrase empties the shopping list.
const CLEAR_ALL_PHRASE: &str = "קניתי הכל";

const CLEARED_MESSAGE: &str = "מעולה! ניקיתי את רשימת הקניות.\n";

/// The usage instructions sent in reply to [HELP_KEYWORD].
pub const HELP_TEXT: &str = "אפשרויות המערכת:\n\
1. להוספת פריט: כתבו את שם הפריט עם אפשרות לציון כמות. לדוגמא:\n   \
- 'תפוח, 3' או 'תפוח, שלושה'\n   \
- 'שני תפוחים' או '3 תפוחים'\n   \
(אם הפריט קיים, הכמות מתעדכנת על ידי הוספת הכמות החדשה)\n\n\
2. להסרת פריט או עדכון כמות: כתבו 'קניתי [שם הפריט]' להסרת יחידה אחת, או 'קניתי [שם הפריט] 2' להסרת 2 יחידות.\n   \
לדוגמא: 'קניתי תפוח' להסרת 1 יחידה או 'קניתי תפוחים 2' להסרת 2 יחידות.\n\n\
3. להסרת כל הפריטים: כתבו 'קניתי הכל'.\n\n\
4. להצגת רשימת הקניות: שלחו הודעה עם פריטים להוספה או כל הודעה אחרת.\n\n\
5. להצגת עזרה: כתבו 'עזרה'.";

/// Recognise messages that are a command on their own, i.e. [Command::Help]
/// and [Command::ClearAll].
///
/// These are only recognised when they make up the whole message, ignoring
/// surrounding whitespace and case.
pub fn parse_message_command(body: &str) -> Option<Command> {
    let body = body.trim().to_lowercase();

    if body == HELP_KEYWORD {
        Some(Command::Help)
    } else if body == CLEAR_ALL_PHRASE {
        Some(Command::ClearAll)
    } else {
        None
    }
}

/// Apply every command in `body` to the inventory and build the reply.
///
/// Each non-empty line is parsed with [parse_line] and reported on its own
/// line of the reply, followed by the updated shopping list. Lines that cannot
/// be understood are added to the list as they are, so the only errors are
/// errors from the underlying store.
pub fn handle_message<S: ItemStore + ?Sized>(
    body: &str,
    inventory: &Inventory<S>,
) -> Result<String, Error> {
    match parse_message_command(body) {
        Some(Command::Help) => return Ok(HELP_TEXT.to_owned()),
        Some(Command::ClearAll) => {
            inventory.clear_all()?;
            tracing::info!("Cleared the shopping list");

            let listing = render_listing(&inventory.list_all()?);
            return Ok(format!("{CLEARED_MESSAGE}{listing}"));
        }
        _ => {}
    }

    let mut response = String::new();

    for line in body.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let command = parse_line(line);
        tracing::debug!("Parsed {line:?} as {command:?}");

        match command {
            Command::Remove { name, quantity } => {
                inventory.partial_remove(&name, quantity)?;
                response.push_str(&format!("הסרתי {quantity} מ'{}'.\n", normalize_name(&name)));
            }
            Command::Add { name, quantity } => {
                inventory.add(&name, quantity)?;
                response.push_str(&format!("הוספתי {quantity} מ'{}'.\n", normalize_name(&name)));
            }
            Command::ClearAll | Command::Help => {
                tracing::warn!("Ignoring whole-message command {command:?} on line {line:?}");
            }
        }
    }

    let listing = render_listing(&inventory.list_all()?);
    response.push('\n');
    response.push_str(&listing);

    Ok(response)
}

/// Apply `body` to the shopping list stored in `connection` and build the reply.
///
/// All changes made by the message are committed together, or not at all if
/// an error occurs.
pub fn reply_to_message(body: &str, connection: &mut Connection) -> Result<String, Error> {
    let transaction = connection.transaction()?;
    let reply = handle_message(body, &Inventory::new(&*transaction))?;
    transaction.commit()?;

    Ok(reply)
}
