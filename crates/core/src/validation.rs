//! Field-level validation helpers shared by the API handlers.
//!
//! Format checks (e.g. email syntax) are done with `validator` derives on the
//! request DTOs; the helpers here cover cross-field and range rules.

use crate::error::CoreError;

/// Maximum length for short text fields (titles, names, locations).
pub const MAX_SHORT_TEXT_LEN: usize = 200;

/// Maximum length for long text fields (descriptions, post bodies).
pub const MAX_LONG_TEXT_LEN: usize = 50_000;

/// Minimum allowed testimonial rating.
pub const MIN_RATING: i16 = 1;

/// Maximum allowed testimonial rating.
pub const MAX_RATING: i16 = 5;

/// Validate that a text field is non-blank and within `max_len` characters.
pub fn validate_text(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(CoreError::Validation(format!(
            "{field} too long: {len} chars (max {max_len})"
        )));
    }
    Ok(())
}

/// Validate an optional salary range: both bounds non-negative and `min <= max`.
pub fn validate_salary_range(min: Option<i64>, max: Option<i64>) -> Result<(), CoreError> {
    if min.is_some_and(|v| v < 0) || max.is_some_and(|v| v < 0) {
        return Err(CoreError::Validation(
            "Salary bounds must not be negative".to_string(),
        ));
    }
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return Err(CoreError::Validation(format!(
                "salary_min ({lo}) must not exceed salary_max ({hi})"
            )));
        }
    }
    Ok(())
}

/// Validate a rating value is within the allowed range.
pub fn validate_rating(rating: i16) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}

/// Validate that a head-count field is at least one.
pub fn validate_positive_count(field: &str, value: i32) -> Result<(), CoreError> {
    if value < 1 {
        return Err(CoreError::Validation(format!(
            "{field} must be at least 1, got {value}"
        )));
    }
    Ok(())
}

/// Validate that a password meets the minimum length.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), CoreError> {
    if password.chars().count() < min_length {
        return Err(CoreError::Validation(format!(
            "Password must be at least {min_length} characters long"
        )));
    }
    Ok(())
}
