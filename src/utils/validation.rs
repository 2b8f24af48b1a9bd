use std::collections::BTreeMap;
use std::fmt;

use chrono::FixedOffset;
use serde::Serialize;
use validator::{Validate, ValidateEmail};

use crate::interceptors::AppError;
use crate::utils::clock::{parse_event_date, start_of_today, Clock};

pub const TITLE_MIN_CHARS: usize = 3;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const EVENT_LOCATION_MIN_CHARS: usize = 3;
pub const CAPACITY_MIN: i64 = 1;
pub const CAPACITY_MAX: i64 = 10_000;
pub const NAME_MIN_CHARS: usize = 2;
pub const PHONE_DIGITS: usize = 10;

/// Per-field messages for a form. Only failing fields are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Collect `(field, message)` pairs, dropping empty messages.
    pub fn from_checks<I, K>(checks: I) -> Self
    where
        I: IntoIterator<Item = (K, String)>,
        K: Into<String>,
    {
        Self(
            checks
                .into_iter()
                .filter(|(_, message)| !message.is_empty())
                .map(|(field, message)| (field.into(), message))
                .collect(),
        )
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// Validate a request struct using validator
pub fn validate_request<T: Validate>(request: &T) -> Result<(), AppError> {
    request.validate().map_err(|e| {
        let errors = e.field_errors().into_iter().map(|(field, errors)| {
            let messages: Vec<String> = errors
                .iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .collect();
            (field.to_string(), messages.join(", "))
        });

        AppError::ValidationError(FieldErrors::from_checks(errors))
    })
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

// Event creation

pub fn validate_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return "Title is required".to_string();
    }
    if char_len(trimmed) < TITLE_MIN_CHARS {
        return "Title must be at least 3 characters".to_string();
    }
    String::new()
}

/// The date may be any time today or later; "today" starts at reference-zone midnight.
pub fn validate_event_date(date: &str, clock: &dyn Clock, offset: &FixedOffset) -> String {
    if date.trim().is_empty() {
        return "Date is required".to_string();
    }
    let Some(selected) = parse_event_date(date, offset) else {
        return "Please enter a valid date".to_string();
    };
    if selected < start_of_today(clock, offset) {
        return "Event date cannot be in the past".to_string();
    }
    String::new()
}

pub fn validate_description(description: &str) -> String {
    if char_len(description) > DESCRIPTION_MAX_CHARS {
        return "Description must be less than 500 characters".to_string();
    }
    String::new()
}

pub fn validate_event_location(location: &str) -> String {
    if !location.is_empty() && char_len(location) < EVENT_LOCATION_MIN_CHARS {
        return "Location must be at least 3 characters if provided".to_string();
    }
    String::new()
}

pub fn validate_capacity(capacity: &str) -> String {
    let capacity = capacity.trim();
    if capacity.is_empty() {
        return String::new();
    }
    match capacity.parse::<i64>() {
        Ok(value) if (CAPACITY_MIN..=CAPACITY_MAX).contains(&value) => String::new(),
        Ok(_) => "Capacity must be between 1 and 10,000".to_string(),
        Err(_) => "Please enter a whole number for capacity".to_string(),
    }
}

/// Capacity as sent to the API; `None` when left blank or unusable.
pub fn parse_capacity(capacity: &str) -> Option<u32> {
    capacity.trim().parse::<u32>().ok()
}

// Registration

pub fn validate_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return "Name is required".to_string();
    }
    if char_len(trimmed) < NAME_MIN_CHARS {
        return "Name must be at least 2 characters".to_string();
    }
    String::new()
}

pub fn validate_email(email: &str) -> String {
    if email.is_empty() {
        return String::new();
    }
    if !is_valid_email(email) {
        return "Please enter a valid email address".to_string();
    }
    String::new()
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) || !email.to_string().validate_email() {
        return false;
    }
    // require a dotted domain, `jane@localhost` is not accepted
    match email.rsplit_once('@') {
        Some((_, domain)) => domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len()),
        None => false,
    }
}

/// Separators are ignored; exactly ten digits must remain.
pub fn validate_phone(phone: &str) -> String {
    if phone.trim().is_empty() {
        return "Phone number is required".to_string();
    }
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if digits != PHONE_DIGITS {
        return "Phone number must be exactly 10 digits".to_string();
    }
    String::new()
}
