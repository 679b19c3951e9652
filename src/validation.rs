//! Input validation for record data.

use crate::error::{CampusError, Result};

/// Maximum allowed length for a record ID.
pub const MAX_ID_LENGTH: usize = 50;

/// Minimum accepted student age.
pub const MIN_AGE: i32 = 17;

/// Maximum accepted student age.
pub const MAX_AGE: i32 = 30;

/// Characters forbidden in IDs to prevent path traversal.
const FORBIDDEN_ID_CHARS: &[char] = &['/', '\\', '\0'];

/// Validates a record ID to prevent path traversal attacks.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(CampusError::InvalidId("ID cannot be empty".to_string()));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(CampusError::InvalidId(format!(
            "ID exceeds maximum length of {} characters",
            MAX_ID_LENGTH
        )));
    }
    if id.contains("..") {
        return Err(CampusError::InvalidId(
            "ID cannot contain '..' (path traversal)".to_string(),
        ));
    }
    for c in FORBIDDEN_ID_CHARS {
        if id.contains(*c) {
            return Err(CampusError::InvalidId(format!("ID cannot contain '{}'", c)));
        }
    }
    Ok(())
}

/// Validates that a required field is non-empty.
pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CampusError::Constraint(format!(
            "Field '{}' is required",
            field
        )));
    }
    Ok(())
}

/// Validates the optional student age against the accepted range.
pub fn validate_age(age: Option<i32>) -> Result<()> {
    if let Some(age) = age {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(CampusError::Constraint(format!(
                "Age must be between {} and {}, got {}",
                MIN_AGE, MAX_AGE, age
            )));
        }
    }
    Ok(())
}
