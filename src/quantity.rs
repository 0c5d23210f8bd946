//! Resolves quantity tokens such as "3" or "שלושה" into numbers.
//!
//! Resolution is best-effort: anything that cannot be understood as a quantity
//! resolves to [DEFAULT_QUANTITY] instead of producing an error.

/// The quantity used when no quantity is given or the token is not understood.
pub const DEFAULT_QUANTITY: i64 = 1;

/// Number words and the quantities they stand for, including both grammatical
/// genders.
const NUMBER_WORDS: [(&str, i64); 21] = [
    ("אחד", 1),
    ("אחת", 1),
    ("שני", 2),
    ("שתי", 2),
    ("שתיים", 2),
    ("שניים", 2),
    ("שלוש", 3),
    ("שלושה", 3),
    ("ארבע", 4),
    ("ארבעה", 4),
    ("חמש", 5),
    ("חמשה", 5),
    ("שש", 6),
    ("ששה", 6),
    ("שבע", 7),
    ("שבעה", 7),
    ("שמונה", 8),
    ("תשע", 9),
    ("תשעה", 9),
    ("עשר", 10),
    ("עשרה", 10),
];

/// Resolve an optional quantity token into a non-negative quantity.
///
/// - `None` resolves to [DEFAULT_QUANTITY].
/// - A sequence of ASCII digits resolves to its value, saturating at
///   `i64::MAX`. "0" resolves to zero.
/// - A number word (see [is_quantity_token]) resolves to its value.
/// - Anything else resolves to [DEFAULT_QUANTITY].
pub fn resolve_quantity(token: Option<&str>) -> i64 {
    let Some(token) = token else {
        return DEFAULT_QUANTITY;
    };
    let token = token.trim();

    if let Some(quantity) = parse_digits(token) {
        return quantity;
    }

    lookup_number_word(token).unwrap_or(DEFAULT_QUANTITY)
}

/// Whether `token` is a digit sequence or a known number word.
pub fn is_quantity_token(token: &str) -> bool {
    is_digit_sequence(token) || lookup_number_word(token).is_some()
}

fn is_digit_sequence(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

fn parse_digits(token: &str) -> Option<i64> {
    if !is_digit_sequence(token) {
        return None;
    }

    Some(token.parse::<i64>().unwrap_or(i64::MAX))
}

fn lookup_number_word(token: &str) -> Option<i64> {
    let token = token.to_lowercase();

    NUMBER_WORDS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|&(_, quantity)| quantity)
}
