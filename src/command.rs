//! Turns a single line of a message into a shopping list command.

use crate::quantity::{DEFAULT_QUANTITY, is_quantity_token, resolve_quantity};

/// Words that start a line removing items from the list, e.g. "קניתי חלב".
const REMOVAL_TRIGGERS: [&str; 3] = ["קניתי", "סיימתי", "תמחק"];

/// A command to apply to the shopping list.
///
/// Item names are kept exactly as written; they are normalized when the
/// command is applied to the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add `quantity` units of an item.
    Add {
        /// The item name as written in the message.
        name: String,
        /// How many units to add, at least one.
        quantity: i64,
    },
    /// Remove `quantity` units of an item.
    Remove {
        /// The item name as written in the message.
        name: String,
        /// How many units to remove. Zero leaves the item unchanged.
        quantity: i64,
    },
    /// Remove every item from the list.
    ClearAll,
    /// Show the usage instructions.
    Help,
}

/// Parse a trimmed, non-empty line into an [Command::Add] or [Command::Remove].
///
/// A line is a removal if it starts with one of the removal words and names an
/// item after it, e.g. "קניתי 2 תפוחים" or "קניתי תפוחים 2". Every other line is
/// an addition, written either as "name, quantity" or "quantity name", e.g.
/// "תפוח, 3" or "שני תפוחים". Lines that fit neither shape add the whole line
/// with a quantity of one, as do additions of zero.
pub fn parse_line(line: &str) -> Command {
    parse_removal(line).unwrap_or_else(|| parse_addition(line))
}

fn parse_removal(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (trigger, rest) = tokens.split_first()?;

    let trigger = trigger.to_lowercase();
    if rest.is_empty() || !REMOVAL_TRIGGERS.contains(&trigger.as_str()) {
        return None;
    }

    let (quantity, name_tokens) = match rest {
        [first, name @ ..] if !name.is_empty() && is_quantity_token(first) => {
            (resolve_quantity(Some(*first)), name)
        }
        [name @ .., last] if !name.is_empty() && is_quantity_token(last) => {
            (resolve_quantity(Some(*last)), name)
        }
        name => (DEFAULT_QUANTITY, name),
    };

    Some(Command::Remove {
        name: name_tokens.join(" "),
        quantity,
    })
}

fn parse_addition(line: &str) -> Command {
    if let Some((name, quantity)) = line.split_once(',') {
        return Command::Add {
            name: name.trim().to_owned(),
            quantity: addition_quantity(quantity.trim()),
        };
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.split_first() {
        Some((first, name)) if is_quantity_token(first) => Command::Add {
            name: name.join(" "),
            quantity: addition_quantity(first),
        },
        _ => Command::Add {
            name: line.to_owned(),
            quantity: DEFAULT_QUANTITY,
        },
    }
}

/// Zero is only meaningful for removals; adding zero units adds one.
fn addition_quantity(token: &str) -> i64 {
    match resolve_quantity(Some(token)) {
        0 => DEFAULT_QUANTITY,
        quantity => quantity,
    }
}
