/// Whitespace as browsers see it: ECMAScript WhiteSpace plus LineTerminator.
/// Unlike `char::is_whitespace` this includes U+FEFF and excludes U+0085.
pub fn is_email_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Trims and lower-cases an address before validation and hashing.
pub fn normalize_email(email: &str) -> String {
    email.trim_matches(is_email_whitespace).to_lowercase()
}

/// Validates that the input looks like a single-`@` address with a dotted domain.
/// Rules:
/// - No whitespace anywhere
/// - Exactly one `@`, with a non-empty local part
/// - The domain holds a `.` that is neither its first nor its last character
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_email_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Need at least one char on each side of some dot.
    let mut chars = domain.char_indices();
    let (Some(_), Some((last, _))) = (chars.next(), domain.char_indices().next_back()) else {
        return false;
    };
    chars.any(|(i, c)| c == '.' && i < last)
}
