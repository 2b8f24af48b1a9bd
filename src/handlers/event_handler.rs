use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::config::AppState;
use crate::dto::{EventForm, EventView};
use crate::interceptors::{ApiSuccess, AppError};
use crate::services::{new_submission_id, EventService, RegistrationService, Submission};
use crate::utils::FieldErrors;
use crate::views::{render_event_form, render_event_list};

#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub notice: Option<String>,
}

/// Events page
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Html<String> {
    let notification = match query.notice.as_deref() {
        Some("registered") => Some(RegistrationService::success_notification()),
        _ => None,
    };

    let listing = EventService::new(state.clone()).load_listing().await;
    Html(render_event_list(&listing, notification.as_ref(), state.reference_offset()))
}

/// Events with their register state as JSON
pub async fn list_events_json(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<EventView>>, AppError> {
    let views = EventService::new(state).list_event_views().await?;
    Ok(ApiSuccess::new("Events retrieved successfully", views))
}

/// Empty creation form
pub async fn new_event_form(State(state): State<AppState>) -> Html<String> {
    Html(render_event_form(
        &EventForm::new(new_submission_id()),
        &FieldErrors::default(),
        None,
        &min_event_date(&state),
    ))
}

/// Validate and submit the creation form
pub async fn create_event(State(state): State<AppState>, Form(form): Form<EventForm>) -> Response {
    let submission = EventService::new(state.clone()).create_event(&form).await;
    let min_date = min_event_date(&state);

    match submission {
        Submission::Rejected(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(render_event_form(&form, &errors, None, &min_date)),
        )
            .into_response(),
        Submission::Busy(notification) => (
            StatusCode::CONFLICT,
            Html(render_event_form(&form, &FieldErrors::default(), Some(&notification), &min_date)),
        )
            .into_response(),
        Submission::Succeeded(notification) => Html(render_event_form(
            &EventForm::new(new_submission_id()),
            &FieldErrors::default(),
            Some(&notification),
            &min_date,
        ))
        .into_response(),
        Submission::Failed(notification) => Html(render_event_form(
            &form,
            &FieldErrors::default(),
            Some(&notification),
            &min_date,
        ))
        .into_response(),
    }
}

fn min_event_date(state: &AppState) -> String {
    state
        .clock
        .now()
        .with_timezone(state.reference_offset())
        .format("%Y-%m-%d")
        .to_string()
}
