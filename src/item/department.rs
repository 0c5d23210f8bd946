//! Supermarket departments and keyword based classification of items.

use std::{fmt::Display, str::FromStr};

use crate::Error;

/// The department of the supermarket an item is found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    /// Fruit and vegetables.
    Produce,
    /// Meat, poultry and fish.
    MeatAndFish,
    /// Milk, cheese and other dairy products.
    Dairy,
    /// Bread and baked goods.
    Bakery,
    /// Water, juice and soft drinks.
    Drinks,
    /// Dry goods, spices and oil.
    Pantry,
    /// Items that do not match any keyword.
    Other,
}

impl Department {
    /// The departments that have keywords, in the order they are checked.
    const CLASSIFIED: [Department; 6] = [
        Department::Produce,
        Department::MeatAndFish,
        Department::Dairy,
        Department::Bakery,
        Department::Drinks,
        Department::Pantry,
    ];

    /// The department name shown to users, also used for sorting the list.
    pub fn label(self) -> &'static str {
        match self {
            Department::Produce => "ירקות ופירות",
            Department::MeatAndFish => "בשר ודגים",
            Department::Dairy => "מוצרי חלב",
            Department::Bakery => "מאפים",
            Department::Drinks => "משקאות",
            Department::Pantry => "מזווה",
            Department::Other => "שונות",
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            Department::Produce => &[
                "ירק", "פירות", "תפוח", "בננה", "אגס", "תות", "כרוב", "גזר", "עגבניה", "עגבניות",
            ],
            Department::MeatAndFish => &["בשר", "סטייק", "עוף", "דג", "נתח", "שיפוד"],
            Department::Dairy => &["חלב", "גבינה", "יוגורט", "חמאה", "קוטג׳"],
            Department::Bakery => &["לחם", "מאפה", "בייגל", "קרואסון", "פיצה"],
            Department::Drinks => &["מים", "משקה", "קולה", "פחית", "מיץ"],
            Department::Pantry => &["סוכר", "מלח", "תבלין", "שמרים", "אורז", "פסטה", "שמן"],
            Department::Other => &[],
        }
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Department {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::CLASSIFIED
            .into_iter()
            .chain([Department::Other])
            .find(|department| department.label() == s)
            .ok_or_else(|| Error::InvalidDepartment(s.to_owned()))
    }
}

/// Find the department for an item by checking whether its name contains any
/// of a department's keywords.
///
/// Departments are checked in a fixed order and the first match wins. Names
/// that match no keyword belong to [Department::Other].
pub fn classify(canonical_name: &str) -> Department {
    let name = canonical_name.to_lowercase();

    Department::CLASSIFIED
        .into_iter()
        .find(|department| {
            department
                .keywords()
                .iter()
                .any(|keyword| name.contains(keyword))
        })
        .unwrap_or(Department::Other)
}
