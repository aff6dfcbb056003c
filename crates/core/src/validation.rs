//! Shared helpers on top of the `validator` crate.
//!
//! Form and request DTOs derive [`validator::Validate`] and point their
//! text fields at [`not_blank`]. The helpers below turn the resulting
//! [`ValidationErrors`] into the flat shapes the rest of the workspace uses:
//! a `field -> message` map for forms, a single [`CoreError::Validation`]
//! for HTTP boundaries.

use std::collections::BTreeMap;

use validator::{ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Failing fields mapped to their first message, ordered by field name.
pub type FieldErrors = BTreeMap<String, String>;

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Flatten field-level errors into one message per field.
///
/// Falls back to `"<field> is invalid"` when the failing rule carries no
/// message of its own.
pub fn field_messages(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                (field.to_string(), message)
            })
        })
        .collect()
}

/// Re-key a field map from Rust field names to their camelCase wire names,
/// so `life_span` is reported as `lifeSpan`.
pub fn camel_case_keys(fields: FieldErrors) -> FieldErrors {
    fields
        .into_iter()
        .map(|(field, message)| (to_camel_case(&field), message))
        .collect()
}

fn to_camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for c in snake.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Join per-field messages into one sentence, in field-name order.
pub fn summarize(fields: &FieldErrors) -> String {
    fields.values().cloned().collect::<Vec<_>>().join("; ")
}

/// Convert derive-level errors into the domain error used at boundaries.
pub fn to_core_error(errors: &ValidationErrors) -> CoreError {
    CoreError::Validation(summarize(&field_messages(errors)))
}
