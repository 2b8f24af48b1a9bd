pub mod event_api;
pub mod event_service;
pub mod registration_service;
pub mod submission;

pub use event_api::{EventApi, HttpEventApi};
pub use event_service::{EventService, ListingState};
pub use registration_service::RegistrationService;
pub use submission::{new_submission_id, Submission, SubmissionGuard};
