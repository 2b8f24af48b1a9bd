use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::config::AppConfig;
use crate::dto::{ApiErrorBody, CreateEventRequest, CreateEventResponse, RegistrationRequest};
use crate::interceptors::{AppError, AppResult};
use crate::models::Event;

pub const LIST_FAILED: &str = "Failed to fetch events";
pub const CREATE_FAILED: &str = "Failed to create event";
pub const REGISTER_FAILED: &str = "Registration failed";

/// The remote event service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventApi: Send + Sync {
    async fn list_events(&self) -> AppResult<Vec<Event>>;

    async fn create_event(&self, request: &CreateEventRequest) -> AppResult<CreateEventResponse>;

    async fn register_attendee(&self, event_id: &str, request: &RegistrationRequest) -> AppResult<()>;
}

#[derive(Clone)]
pub struct HttpEventApi {
    client: Client,
    event_base_url: String,
    registration_base_url: String,
}

impl HttpEventApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            event_base_url: config.event_api_base_url.clone(),
            registration_base_url: config.registration_api_base_url.clone(),
        }
    }

    fn events_url(&self) -> String {
        format!("{}/events", self.event_base_url)
    }

    fn create_event_url(&self) -> String {
        format!("{}/api/event", self.event_base_url)
    }

    fn register_url(&self) -> String {
        format!("{}/api/user", self.registration_base_url)
    }

    /// Turn a non-success reply into an `UpstreamError`, keeping whichever
    /// message field `pick` selects when the body has one.
    async fn upstream_error(
        response: Response,
        pick: fn(ApiErrorBody) -> Option<String>,
        fallback: &str,
    ) -> AppError {
        let status = response.status().as_u16();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(pick)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());

        tracing::warn!("Event service returned {}: {}", status, message);
        AppError::UpstreamError { status, message }
    }
}

#[async_trait]
impl EventApi for HttpEventApi {
    async fn list_events(&self) -> AppResult<Vec<Event>> {
        let url = self.events_url();
        tracing::debug!("Fetching events from {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            tracing::warn!("Event listing returned {}", status);
            return Err(AppError::UpstreamError { status, message: LIST_FAILED.to_string() });
        }

        let events: Vec<Event> = response.json().await?;
        tracing::info!("Fetched {} events", events.len());
        Ok(events)
    }

    async fn create_event(&self, request: &CreateEventRequest) -> AppResult<CreateEventResponse> {
        let url = self.create_event_url();
        tracing::debug!("Creating event '{}' at {}", request.title, url);

        let response = self.client.post(&url).json(request).send().await?;
        if !response.status().is_success() {
            return Err(Self::upstream_error(response, |body| body.error, CREATE_FAILED).await);
        }

        let created: CreateEventResponse = response.json().await?;
        tracing::info!("Event '{}' created", created.title);
        Ok(created)
    }

    async fn register_attendee(&self, event_id: &str, request: &RegistrationRequest) -> AppResult<()> {
        let url = self.register_url();
        tracing::debug!("Registering attendee for event {} at {}", event_id, url);

        let response = self
            .client
            .post(&url)
            .query(&[("eventId", event_id)])
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::upstream_error(response, |body| body.message, REGISTER_FAILED).await);
        }

        tracing::info!("Attendee registered for event {}", event_id);
        Ok(())
    }
}
