pub mod event_dto;
pub mod registration_dto;

pub use event_dto::{
    ApiErrorBody,
    CreateEventRequest,
    CreateEventResponse,
    EventForm,
    EventView,
};
pub use registration_dto::{RegistrationForm, RegistrationRequest};
