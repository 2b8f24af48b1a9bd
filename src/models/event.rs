use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event as served by the event API. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    SoldOut,
    Cancelled,
    Unspecified,
}

impl EventStatus {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("upcoming") => EventStatus::Upcoming,
            Some("sold-out") => EventStatus::SoldOut,
            Some("cancelled") => EventStatus::Cancelled,
            _ => EventStatus::Unspecified,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "green",
            EventStatus::SoldOut => "red",
            EventStatus::Cancelled => "gray",
            EventStatus::Unspecified => "blue",
        }
    }
}

impl Event {
    pub fn status_kind(&self) -> EventStatus {
        EventStatus::parse(self.status.as_deref())
    }

    /// `sold-out` becomes `SOLD OUT`; no badge without a status
    pub fn status_badge(&self) -> Option<String> {
        self.status
            .as_deref()
            .filter(|status| !status.is_empty())
            .map(|status| status.replacen('-', " ", 1).to_uppercase())
    }

    pub fn category_color(&self) -> &'static str {
        match self.category.as_deref() {
            Some("Technology") => "blue",
            Some("Design") => "purple",
            Some("Marketing") => "orange",
            Some("Business") => "teal",
            _ => "gray",
        }
    }
}

/// What the register control of an event card does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegisterAction {
    Register,
    SoldOut,
    EventEnded,
}

impl RegisterAction {
    /// Sold out wins over ended when both apply.
    pub fn for_event(event: &Event, is_past: bool) -> Self {
        if event.status_kind() == EventStatus::SoldOut {
            RegisterAction::SoldOut
        } else if is_past {
            RegisterAction::EventEnded
        } else {
            RegisterAction::Register
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegisterAction::Register => "Register",
            RegisterAction::SoldOut => "Sold Out",
            RegisterAction::EventEnded => "Event Ended",
        }
    }

    pub fn is_disabled(&self) -> bool {
        !matches!(self, RegisterAction::Register)
    }
}
