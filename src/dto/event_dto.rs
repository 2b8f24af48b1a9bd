use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Event, RegisterAction};

/// Creation form exactly as submitted. `submission_id` identifies the
/// rendered form and is never sent upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventForm {
    pub submission_id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub capacity: String,
}

/// Create event request. Optional fields are left out of the body when blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,

    pub date: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Description must be less than 500 characters"))]
    pub description: Option<String>,

    /// Length is checked on the untrimmed form value, so the trimmed payload
    /// may be shorter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 10000, message = "Capacity must be between 1 and 10,000"))]
    pub capacity: Option<u32>,
}

/// Successful creation reply; only the echoed title is relied on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventResponse {
    pub title: String,
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<String>,
}

/// Body of a failed API call. Creation reports `error`, registration `message`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Listing entry with its derived register state
#[derive(Debug, Clone, Serialize)]
pub struct EventView {
    #[serde(flatten)]
    pub event: Event,
    pub is_past: bool,
    pub register_action: RegisterAction,
    pub register_label: &'static str,
    pub register_disabled: bool,
}

impl EventForm {
    pub fn new(submission_id: String) -> Self {
        Self { submission_id, ..Self::default() }
    }
}

impl EventView {
    pub fn new(event: Event, is_past: bool) -> Self {
        let register_action = RegisterAction::for_event(&event, is_past);
        Self {
            event,
            is_past,
            register_action,
            register_label: register_action.label(),
            register_disabled: register_action.is_disabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validate_request;
    use serde_json::json;

    fn tomorrow() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-19T04:30:00Z").unwrap().with_timezone(&Utc)
    }

    #[test]
    fn blank_optionals_are_not_serialized() {
        let request = CreateEventRequest {
            title: "Spring Fest".to_string(),
            date: tomorrow(),
            description: None,
            location: None,
            capacity: None,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "title": "Spring Fest", "date": "2026-10-19T04:30:00Z" })
        );
    }

    #[test]
    fn payload_rules_are_checked() {
        let request = CreateEventRequest {
            title: "Spring Fest".to_string(),
            date: tomorrow(),
            description: Some("x".repeat(501)),
            location: Some("ab".to_string()),
            capacity: Some(20_000),
        };

        let err = validate_request(&request).unwrap_err();
        let crate::interceptors::AppError::ValidationError(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.get("capacity"), Some("Capacity must be between 1 and 10,000"));
        assert_eq!(errors.get("description"), Some("Description must be less than 500 characters"));
        assert_eq!(errors.get("location"), None);
    }

    #[test]
    fn event_form_tolerates_missing_fields() {
        let form: EventForm = serde_json::from_value(json!({ "title": "Only title" })).unwrap();
        assert_eq!(form.title, "Only title");
        assert!(form.capacity.is_empty());
    }
}
