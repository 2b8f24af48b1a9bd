use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::config::AppState;
use crate::dto::RegistrationForm;
use crate::services::{new_submission_id, RegistrationService, Submission};
use crate::utils::FieldErrors;
use crate::views::render_registration_form;

/// Listing URL that shows the registration success banner
pub const REGISTERED_REDIRECT: &str = "/?notice=registered";

/// Empty registration form for one event
pub async fn registration_form(Path(event_id): Path<String>) -> Html<String> {
    Html(render_registration_form(
        &event_id,
        &RegistrationForm::new(new_submission_id()),
        &FieldErrors::default(),
        None,
    ))
}

/// Validate and submit a registration, then go back to the listing
pub async fn register(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Form(form): Form<RegistrationForm>,
) -> Response {
    match RegistrationService::new(state).register(&event_id, &form).await {
        Submission::Succeeded(_) => Redirect::to(REGISTERED_REDIRECT).into_response(),
        Submission::Rejected(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(render_registration_form(&event_id, &form, &errors, None)),
        )
            .into_response(),
        Submission::Busy(notification) => (
            StatusCode::CONFLICT,
            Html(render_registration_form(&event_id, &form, &FieldErrors::default(), Some(&notification))),
        )
            .into_response(),
        Submission::Failed(notification) => Html(render_registration_form(
            &event_id,
            &form,
            &FieldErrors::default(),
            Some(&notification),
        ))
        .into_response(),
    }
}
