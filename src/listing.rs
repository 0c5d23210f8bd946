//! Renders the shopping list as a fixed-width table per department.

use crate::inventory::DepartmentItems;

/// Shown instead of a table when there is nothing on the list.
pub const EMPTY_LIST_MESSAGE: &str = "רשימת הקניות ריקה.";

const LIST_TITLE: &str = "רשימת הקניות הנוכחית:";
const CODE_FENCE: &str = "```";
const NAME_HEADER: &str = "מוצר";
const QUANTITY_HEADER: &str = "כמות";
const NAME_WIDTH: usize = 20;
const QUANTITY_WIDTH: usize = 5;
const RULE_WIDTH: usize = 30;

/// Render the grouped items as monospace tables, one per department.
///
/// Departments and items are rendered in the order they are given, see
/// [crate::inventory::Inventory::list_all].
pub fn render_listing(groups: &[DepartmentItems]) -> String {
    if groups.iter().all(|group| group.items.is_empty()) {
        return EMPTY_LIST_MESSAGE.to_owned();
    }

    let rule = "-".repeat(RULE_WIDTH);
    let mut lines = vec![LIST_TITLE.to_owned(), CODE_FENCE.to_owned()];

    for group in groups.iter().filter(|group| !group.items.is_empty()) {
        lines.push(format!("{}:", group.department));
        lines.push(rule.clone());
        lines.push(format!(
            "{NAME_HEADER:<NAME_WIDTH$}{QUANTITY_HEADER:>QUANTITY_WIDTH$}"
        ));
        lines.push(rule.clone());
        lines.extend(group.items.iter().map(|item| {
            format!(
                "{:<NAME_WIDTH$}{:>QUANTITY_WIDTH$}",
                item.name, item.quantity
            )
        }));
        lines.push(rule.clone());
    }

    lines.push(CODE_FENCE.to_owned());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use crate::{
        inventory::DepartmentItems,
        item::{Department, Item},
    };

    use super::{EMPTY_LIST_MESSAGE, render_listing};

    fn item(name: &str, quantity: i64, department: Department) -> Item {
        Item {
            id: 1,
            name: name.to_owned(),
            quantity,
            department,
        }
    }

    #[test]
    fn empty_list_renders_message() {
        assert_eq!(render_listing(&[]), EMPTY_LIST_MESSAGE);
    }

    #[test]
    fn renders_table_per_department() {
        let groups = vec![
            DepartmentItems {
                department: Department::Produce,
                items: vec![item("תפוח", 3, Department::Produce)],
            },
            DepartmentItems {
                department: Department::Other,
                items: vec![
                    item("a", 12, Department::Other),
                    item("z", 1, Department::Other),
                ],
            },
        ];

        let want = [
            "רשימת הקניות הנוכחית:",
            "```",
            "ירקות ופירות:",
            "------------------------------",
            "מוצר                 כמות",
            "------------------------------",
            "תפוח                    3",
            "------------------------------",
            "שונות:",
            "------------------------------",
            "מוצר                 כמות",
            "------------------------------",
            "a                      12",
            "z                       1",
            "------------------------------",
            "```",
        ]
        .join("\n");

        assert_eq!(render_listing(&groups), want);
    }

    #[test]
    fn long_names_are_not_truncated() {
        let name = "גבינה צהובה מגוררת 28 אחוז";
        let groups = vec![DepartmentItems {
            department: Department::Dairy,
            items: vec![item(name, 2, Department::Dairy)],
        }];

        let listing = render_listing(&groups);

        assert!(listing.contains(&format!("{name}    2")));
    }
}
