//! Helpers for free-text search filters.

/// Build a case-insensitive substring pattern for `ILIKE`.
///
/// `%`, `_` and `\` in the user's text are escaped with a backslash (the
/// default `LIKE` escape character), so they match literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
