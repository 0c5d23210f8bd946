//! Reduces item names to the canonical form used as the inventory key.

/// Names this short (in characters) are never reduced.
const MIN_REDUCIBLE_LENGTH: usize = 3;

/// Plural suffixes and their singular replacements, checked in order.
const PLURAL_SUFFIXES: [(&str, &str); 3] = [("יות", "יה"), ("ים", ""), ("ות", "")];

/// Convert a raw item name into its canonical name.
///
/// The name is trimmed, lowercased and stripped of commas. Names longer than
/// three characters then have the first matching plural suffix reduced to its
/// singular form, e.g. "תפוחים" becomes "תפוח" and "עגבניות" becomes "עגבניה".
///
/// This is a heuristic: a name that merely happens to end in one of the
/// suffixes is reduced as well.
pub fn normalize_name(raw_name: &str) -> String {
    let name = raw_name.trim().to_lowercase().replace(',', "");

    if name.chars().count() <= MIN_REDUCIBLE_LENGTH {
        return name;
    }

    for (suffix, replacement) in PLURAL_SUFFIXES {
        if let Some(stem) = name.strip_suffix(suffix) {
            return format!("{stem}{replacement}");
        }
    }

    name
}

#[cfg(test)]
mod tests {
    use super::normalize_name;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize_name("  Milk "), "milk");
    }

    #[test]
    fn strips_commas() {
        assert_eq!(normalize_name("חלב,"), "חלב");
    }

    #[test]
    fn drops_masculine_plural_suffix() {
        assert_eq!(normalize_name("תפוחים"), "תפוח");
    }

    #[test]
    fn drops_feminine_plural_suffix() {
        assert_eq!(normalize_name("עוגות"), "עוג");
    }

    #[test]
    fn longer_suffix_takes_precedence() {
        assert_eq!(normalize_name("עגבניות"), "עגבניה");
    }

    #[test]
    fn short_names_are_left_alone() {
        assert_eq!(normalize_name("מים"), "מים");
        assert_eq!(normalize_name(" תות "), "תות");
    }

    #[test]
    fn length_is_counted_after_removing_commas() {
        assert_eq!(normalize_name("מי,ם"), "מים");
    }

    #[test]
    fn non_plural_names_ending_in_suffix_are_reduced_too() {
        assert_eq!(normalize_name("שמרים"), "שמר");
    }

    #[test]
    fn normalizing_twice_is_stable() {
        for name in ["תפוחים", "עגבניות", "חלב", "Bread Rolls", "מים", "לחם מלא"] {
            let once = normalize_name(name);

            assert_eq!(normalize_name(&once), once, "name: {name}");
        }
    }
}
