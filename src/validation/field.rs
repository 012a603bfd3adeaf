use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

use crate::error::FieldError;

pub const MIN_LENGTH: usize = 3;
pub const MAX_LENGTH: usize = 50;

/// Letter runs joined by a single apostrophe, hyphen or space.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]+(?:[' -][a-zA-Z]+)*$").expect("name pattern is a valid regex"));

fn check_length(value: &str, min: usize, max: usize) -> Result<(), FieldError> {
    let len = value.chars().count();
    if len < min {
        return Err(FieldError::TooShort { min });
    }
    if len > max {
        return Err(FieldError::TooLong { max });
    }
    Ok(())
}

/// Required, 3 to 50 ASCII letters or digits, at least one letter.
pub fn validate_login(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    check_length(value, MIN_LENGTH, MAX_LENGTH)?;
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) || !value.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(FieldError::Pattern);
    }
    Ok(())
}

/// Required, 3 to 50 characters, no whitespace anywhere.
pub fn validate_password(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    check_length(value, MIN_LENGTH, MAX_LENGTH)?;
    if value.chars().any(char::is_whitespace) {
        return Err(FieldError::Pattern);
    }
    Ok(())
}

/// First or last name: required, at most 50 characters.
pub fn validate_name(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    check_length(value, 1, MAX_LENGTH)?;
    if !NAME_PATTERN.is_match(value) {
        return Err(FieldError::Pattern);
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if !value.validate_email() {
        return Err(FieldError::Email);
    }
    Ok(())
}

pub fn login_valid(value: &str) -> bool {
    validate_login(value).is_ok()
}

pub fn password_valid(value: &str) -> bool {
    validate_password(value).is_ok()
}

pub fn name_valid(value: &str) -> bool {
    validate_name(value).is_ok()
}

pub fn email_valid(value: &str) -> bool {
    validate_email(value).is_ok()
}
