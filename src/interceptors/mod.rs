pub mod response;
pub mod error;

pub use response::{ApiResponse, ApiSuccess, ApiError, Notification, NotificationStatus};
pub use error::{AppError, AppResult, ErrorCode};
