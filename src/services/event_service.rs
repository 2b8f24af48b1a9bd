use chrono::FixedOffset;

use crate::config::AppState;
use crate::dto::{CreateEventRequest, EventForm, EventView};
use crate::interceptors::{AppError, AppResult, Notification};
use crate::services::event_api::LIST_FAILED;
use crate::services::Submission;
use crate::utils::validation::{
    parse_capacity, validate_capacity, validate_description, validate_event_date,
    validate_event_location, validate_title,
};
use crate::utils::{is_past, parse_event_date, validate_request, Clock, FieldErrors};

const CREATED_TITLE: &str = "Event Created Successfully";
const CREATE_FAILED_TITLE: &str = "Event Creation Failed";
const CREATE_FAILED_GENERIC: &str = "An error occurred while creating the event";

/// What the listing page shows
#[derive(Debug, Clone)]
pub enum ListingState {
    Loaded(Vec<EventView>),
    Failed(String),
}

#[derive(Clone)]
pub struct EventService {
    state: AppState,
}

impl EventService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Fetch events in API order with their register state
    pub async fn list_event_views(&self) -> AppResult<Vec<EventView>> {
        let events = self.state.api.list_events().await?;
        let clock = self.state.clock.as_ref();
        let offset = self.state.reference_offset();

        Ok(events
            .into_iter()
            .map(|event| {
                let past = is_past(&event.date, clock, offset);
                EventView::new(event, past)
            })
            .collect())
    }

    pub async fn load_listing(&self) -> ListingState {
        match self.list_event_views().await {
            Ok(views) => ListingState::Loaded(views),
            Err(err) => {
                tracing::error!("Failed to load events: {}", err);
                ListingState::Failed(err.user_message(LIST_FAILED))
            }
        }
    }

    pub async fn create_event(&self, form: &EventForm) -> Submission {
        let Some(_in_flight) = self.state.event_form_guard.try_acquire(&form.submission_id) else {
            tracing::warn!("Event creation refused, form {} is already submitting", form.submission_id);
            return Submission::busy();
        };

        let request = match build_event_request(form, self.state.clock.as_ref(), self.state.reference_offset()) {
            Ok(request) => request,
            Err(errors) => {
                tracing::debug!("Event form rejected: {}", errors);
                return Submission::Rejected(errors);
            }
        };
        if let Err(AppError::ValidationError(errors)) = validate_request(&request) {
            tracing::debug!("Event payload rejected: {}", errors);
            return Submission::Rejected(errors);
        }

        match self.state.api.create_event(&request).await {
            Ok(created) => Submission::Succeeded(Notification::success(
                CREATED_TITLE,
                format!("Event \"{}\" has been created!", created.title),
            )),
            Err(err) => {
                tracing::error!("Event creation error: {}", err);
                Submission::Failed(Notification::error(
                    CREATE_FAILED_TITLE,
                    err.user_message(CREATE_FAILED_GENERIC),
                ))
            }
        }
    }
}

/// Check every field and build the sparse payload, or report what failed.
pub fn build_event_request(
    form: &EventForm,
    clock: &dyn Clock,
    offset: &FixedOffset,
) -> Result<CreateEventRequest, FieldErrors> {
    let errors = FieldErrors::from_checks([
        ("title", validate_title(&form.title)),
        ("date", validate_event_date(&form.date, clock, offset)),
        ("description", validate_description(&form.description)),
        ("location", validate_event_location(&form.location)),
        ("capacity", validate_capacity(&form.capacity)),
    ]);
    if !errors.is_empty() {
        return Err(errors);
    }

    let Some(date) = parse_event_date(&form.date, offset) else {
        let mut errors = FieldErrors::default();
        errors.insert("date", "Please enter a valid date");
        return Err(errors);
    };

    Ok(CreateEventRequest {
        title: form.title.trim().to_string(),
        date,
        description: non_blank(&form.description),
        location: non_blank(&form.location),
        capacity: parse_capacity(&form.capacity),
    })
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
