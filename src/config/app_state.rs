use std::sync::Arc;

use chrono::FixedOffset;

use crate::config::AppConfig;
use crate::services::{EventApi, SubmissionGuard};
use crate::utils::Clock;

/// Application state shared across all handlers and services
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Remote event service
    pub api: Arc<dyn EventApi>,
    /// Time source for every "now" comparison
    pub clock: Arc<dyn Clock>,
    /// In-flight creation forms, keyed by submission token
    pub event_form_guard: SubmissionGuard,
    /// In-flight registration forms, keyed by submission token
    pub registration_guard: SubmissionGuard,
}

impl AppState {
    pub fn new(config: AppConfig, api: Arc<dyn EventApi>, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: Arc::new(config),
            api,
            clock,
            event_form_guard: SubmissionGuard::new(),
            registration_guard: SubmissionGuard::new(),
        }
    }

    pub fn reference_offset(&self) -> &FixedOffset {
        &self.config.reference_offset
    }
}
