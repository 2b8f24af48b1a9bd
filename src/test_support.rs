//! Fixtures shared by unit tests.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};

use crate::config::{AppConfig, AppState};
use crate::models::Event;
use crate::services::EventApi;
use crate::utils::FixedClock;

/// 2026-10-18 12:00 in the +05:30 reference zone
pub const NOW: &str = "2026-10-18T06:30:00Z";

pub fn instant(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("valid RFC 3339 fixture")
        .with_timezone(&Utc)
}

pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 3000,
        environment: "test".to_string(),
        app_name: "event-pass-web".to_string(),
        app_version: "0.1.0".to_string(),
        event_api_base_url: "http://events.test".to_string(),
        registration_api_base_url: "http://registrations.test".to_string(),
        reference_offset: FixedOffset::east_opt(5 * 3600 + 1800).expect("valid offset"),
    }
}

pub fn test_state(api: impl EventApi + 'static) -> AppState {
    AppState::new(test_config(), Arc::new(api), Arc::new(FixedClock(instant(NOW))))
}

pub fn event(id: &str, title: &str, date: &str, status: Option<&str>) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(format!("About {}", title)),
        date: instant(date),
        location: Some("Main Hall".to_string()),
        category: Some("Technology".to_string()),
        status: status.map(str::to_string),
        capacity: Some(100),
    }
}
