pub mod event_handler;
pub mod registration_handler;
pub mod health_handler;

pub use event_handler::{create_event, list_events, list_events_json, new_event_form};
pub use registration_handler::{register, registration_form};
pub use health_handler::health_check;
