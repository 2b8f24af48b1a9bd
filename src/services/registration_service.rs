use crate::config::AppState;
use crate::dto::{RegistrationForm, RegistrationRequest};
use crate::interceptors::Notification;
use crate::services::Submission;
use crate::utils::validation::{validate_email, validate_name, validate_phone};
use crate::utils::FieldErrors;

const REGISTERED_TITLE: &str = "Registration Successful";
const REGISTERED_DESCRIPTION: &str = "Student has been registered successfully!";
const REGISTER_FAILED_TITLE: &str = "Registration Failed";
const REGISTER_FAILED_GENERIC: &str = "An error occurred during registration";

#[derive(Clone)]
pub struct RegistrationService {
    state: AppState,
}

impl RegistrationService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Banner shown on the listing after a successful registration
    pub fn success_notification() -> Notification {
        Notification::success(REGISTERED_TITLE, REGISTERED_DESCRIPTION)
    }

    /// Register an attendee for `event_id`, taken verbatim from the path.
    pub async fn register(&self, event_id: &str, form: &RegistrationForm) -> Submission {
        let Some(_in_flight) = self.state.registration_guard.try_acquire(&form.submission_id) else {
            tracing::warn!(
                "Registration for event {} refused, form {} is already submitting",
                event_id,
                form.submission_id
            );
            return Submission::busy();
        };

        let request = form.to_request();
        let errors = validate_registration(&request);
        if !errors.is_empty() {
            tracing::debug!("Registration form rejected: {}", errors);
            return Submission::Rejected(errors);
        }

        match self.state.api.register_attendee(event_id, &request).await {
            Ok(()) => Submission::Succeeded(Self::success_notification()),
            Err(err) => {
                tracing::error!("Registration error for event {}: {}", event_id, err);
                Submission::Failed(Notification::error(
                    REGISTER_FAILED_TITLE,
                    err.user_message(REGISTER_FAILED_GENERIC),
                ))
            }
        }
    }
}

/// Location is collected but never checked.
pub fn validate_registration(request: &RegistrationRequest) -> FieldErrors {
    FieldErrors::from_checks([
        ("name", validate_name(&request.name)),
        ("email", validate_email(&request.email)),
        ("phone", validate_phone(&request.phone)),
    ])
}
