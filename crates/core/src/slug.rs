//! URL slug generation for blog posts.

/// Maximum slug length in characters.
pub const MAX_SLUG_LEN: usize = 80;

/// Slug used when the title contains no ASCII alphanumerics.
const FALLBACK_SLUG: &str = "post";

/// Convert a title into a URL slug.
///
/// Lowercases ASCII letters, keeps digits, and collapses every run of other
/// characters into a single hyphen. Leading and trailing hyphens are removed.
///
/// ```
/// use jobboard_core::slug::slugify;
/// assert_eq!(slugify("Hiring in 2025: What's Next?"), "hiring-in-2025-what-s-next");
/// assert_eq!(slugify("   "), "post");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Append a numeric disambiguator to a slug (`base-n`).
pub fn with_suffix(base: &str, n: u32) -> String {
    format!("{base}-{n}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_punctuation_and_whitespace() {
        assert_eq!(slugify("Top  10 -- Interview Tips!!"), "top-10-interview-tips");
    }

    #[test]
    fn strips_leading_and_trailing_separators() {
        assert_eq!(slugify("--Remote Work--"), "remote-work");
    }

    #[test]
    fn non_ascii_only_falls_back() {
        assert_eq!(slugify("日本語"), "post");
    }

    #[test]
    fn truncates_without_trailing_hyphen() {
        let title = format!("{} tail", "a".repeat(79));
        let slug = slugify(&title);
        assert_eq!(slug.len(), 79);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn suffix_appends_number() {
        assert_eq!(with_suffix("careers", 3), "careers-3");
    }
}
