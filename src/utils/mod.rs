pub mod clock;
pub mod validation;

pub use clock::{is_past, parse_event_date, Clock, FixedClock, SystemClock};
pub use validation::{validate_request, FieldErrors};
