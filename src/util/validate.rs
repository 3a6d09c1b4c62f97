//! Form field assertions.
//!
//! Each validator returns `Ok(())` or a `ClientError::Validation` carrying the
//! message to show the user. Page code chains them with `?` before submitting.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ClientError;

pub const DEFAULT_MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// `local@domain.tld` shape with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// # Errors
///
/// Fails when `value` is empty after trimming.
pub fn validate_required(value: &str, field_name: &str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        return Err(ClientError::validation(format!("{field_name} is required")));
    }
    Ok(())
}

/// # Errors
///
/// Fails when `email` does not look like an address.
pub fn validate_email(email: &str) -> Result<(), ClientError> {
    if !is_valid_email(email) {
        return Err(ClientError::validation("Please enter a valid email address"));
    }
    Ok(())
}

/// # Errors
///
/// Fails when `password` has fewer than `min_len` characters.
pub fn validate_password(password: &str, min_len: usize) -> Result<(), ClientError> {
    if password.chars().count() < min_len {
        return Err(ClientError::validation(format!(
            "Password must be at least {min_len} characters long"
        )));
    }
    Ok(())
}

/// # Errors
///
/// Fails when the confirmation differs from the password.
pub fn validate_password_match(password: &str, confirm: &str) -> Result<(), ClientError> {
    if password != confirm {
        return Err(ClientError::validation("Passwords do not match"));
    }
    Ok(())
}

/// Compares fixed-width `HH:MM` strings lexically.
///
/// # Errors
///
/// Fails unless `start` is strictly before `end`.
pub fn validate_time(start: &str, end: &str) -> Result<(), ClientError> {
    if start >= end {
        return Err(ClientError::validation("End time must be after start time"));
    }
    Ok(())
}
