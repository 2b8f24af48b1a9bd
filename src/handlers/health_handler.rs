use axum::extract::State;
use serde_json::{json, Value};

use crate::config::AppState;
use crate::interceptors::{ApiSuccess, AppError};

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<ApiSuccess<Value>, AppError> {
    let data = json!({
        "status": "ok",
        "app": state.config.app_name,
        "version": state.config.app_version,
        "timestamp": state.clock.now().to_rfc3339(),
    });

    Ok(ApiSuccess::new("Service is healthy", data))
}
