//! Input checks shared by the resource services.
//!
//! Each check names the offending parameter in the returned
//! [`ValidationError`], so callers can map complaints back to arguments.

use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Require a non-empty list of URLs.
///
/// # Errors
///
/// Returns a `urls` validation error if the list is empty.
pub fn urls(urls: &[String]) -> Result<(), ValidationError> {
    if urls.is_empty() {
        return Err(ValidationError::field("urls", "URLs must be a non-empty list"));
    }
    Ok(())
}

/// Require `value` to be a JSON object. Empty objects are accepted.
///
/// # Errors
///
/// Returns a validation error on `field` for any non-object value.
pub fn object<'a>(
    field: &str,
    value: &'a Value,
) -> Result<&'a Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| not_a_dictionary(field))
}

/// Require `value` to be a JSON object with at least one key.
///
/// `null`, non-objects and `{}` are rejected with the same complaint.
///
/// # Errors
///
/// Returns a validation error on `field`.
pub fn non_empty_object<'a>(
    field: &str,
    value: &'a Value,
) -> Result<&'a Map<String, Value>, ValidationError> {
    match value.as_object() {
        Some(map) if !map.is_empty() => Ok(map),
        _ => Err(not_a_dictionary(field)),
    }
}

/// Require a non-empty string.
///
/// # Errors
///
/// Returns a validation error on `field` if `value` is empty.
pub fn non_empty_str(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::field(
            field,
            format!("{field} must be a non-empty string"),
        ));
    }
    Ok(())
}

/// Require a non-empty slice.
///
/// # Errors
///
/// Returns a validation error on `field` if `values` is empty.
pub fn non_empty_list<T>(field: &str, values: &[T]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::field(
            field,
            format!("{field} must be a non-empty list"),
        ));
    }
    Ok(())
}

fn not_a_dictionary(field: &str) -> ValidationError {
    ValidationError::field(field, format!("{field} must be a dictionary"))
}
