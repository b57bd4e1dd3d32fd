// Input validation shared by the command layer

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::AppError;

const USERNAME_MIN: usize = 4;
const USERNAME_MAX: usize = 100;
const PASSWORD_MIN: usize = 6;
const PASSWORD_MAX: usize = 100;
const EVENT_NAME_MIN: usize = 3;
const YEAR_MIN: i32 = 2023;
const YEAR_MAX: i32 = 2100;

pub fn validate_username(raw: &str) -> Result<String, AppError> {
    let username = raw.trim();
    if username.len() < USERNAME_MIN || username.len() > USERNAME_MAX {
        return Err(AppError::Validation(format!(
            "username must be {} to {} characters",
            USERNAME_MIN, USERNAME_MAX
        )));
    }
    reject_delimiters("username", username)?;
    Ok(username.to_string())
}

/// Passwords are opaque and not trimmed; they still live in the record
/// file, so the field delimiter is refused.
pub fn validate_password(raw: &str) -> Result<String, AppError> {
    if raw.len() < PASSWORD_MIN || raw.len() > PASSWORD_MAX {
        return Err(AppError::Validation(format!(
            "password must be {} to {} characters",
            PASSWORD_MIN, PASSWORD_MAX
        )));
    }
    reject_delimiters("password", raw)?;
    Ok(raw.to_string())
}

pub fn validate_event_name(raw: &str) -> Result<String, AppError> {
    let name = raw.trim();
    if name.len() < EVENT_NAME_MIN {
        return Err(AppError::Validation(format!(
            "event name must be at least {} characters",
            EVENT_NAME_MIN
        )));
    }
    reject_delimiters("event name", name)?;
    Ok(name.to_string())
}

/// Non-empty single-line text (names, locations, contact info).
pub fn validate_required_text(field: &str, raw: &str) -> Result<String, AppError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    reject_delimiters(field, value)?;
    Ok(value.to_string())
}

/// Possibly-empty single-line text (descriptions).
pub fn validate_free_text(field: &str, raw: &str) -> Result<String, AppError> {
    let value = raw.trim();
    reject_delimiters(field, value)?;
    Ok(value.to_string())
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation("date must be YYYY-MM-DD".to_string()))?;
    if date.year() < YEAR_MIN || date.year() > YEAR_MAX {
        return Err(AppError::Validation(format!(
            "year must be between {} and {}",
            YEAR_MIN, YEAR_MAX
        )));
    }
    Ok(date)
}

pub fn parse_time(raw: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|_| AppError::Validation("time must be HH:MM (24-hour)".to_string()))
}

/// The record codec never escapes, so the one character that would corrupt
/// a record is refused at input time. Semicolons and colons are harmless in
/// free text; only the two list-valued event fields give them meaning.
fn reject_delimiters(field: &str, value: &str) -> Result<(), AppError> {
    if value.contains(',') || value.contains('\n') || value.contains('\r') {
        return Err(AppError::Validation(format!(
            "{} must not contain commas or line breaks",
            field
        )));
    }
    Ok(())
}
