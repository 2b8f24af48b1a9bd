use axum::{
    routing::get,
    Router,
};

use crate::config::AppState;
use crate::handlers::{
    create_event, health_check, list_events, list_events_json, new_event_form, register,
    registration_form,
};
use crate::interceptors::AppError;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    // Pages
    let page_routes = Router::new()
        .route("/", get(list_events))
        .route("/register/events", get(new_event_form).post(create_event))
        .route("/register/:id", get(registration_form).post(register));

    // JSON routes
    let api_routes = Router::new()
        .route("/events", get(list_events_json));

    Router::new()
        .merge(page_routes)
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("No such page".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::dto::CreateEventResponse;
    use crate::services::event_api::MockEventApi;
    use crate::test_support::{event, test_state};

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn listing_api() -> MockEventApi {
        let mut api = MockEventApi::new();
        api.expect_list_events().returning(|| {
            Ok(vec![
                event("sold", "Hackathon", "2026-11-01T10:00:00Z", Some("sold-out")),
                event("ended", "Old Meetup", "2026-10-01T10:00:00Z", Some("upcoming")),
                event("open", "Workshop", "2026-10-20T10:00:00Z", Some("upcoming")),
            ])
        });
        api
    }

    #[tokio::test]
    async fn listing_page_labels_register_controls() {
        let app = create_router(test_state(listing_api()));

        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("disabled>Sold Out</button>"));
        assert!(html.contains("disabled>Event Ended</button>"));
        assert!(html.contains(r#"href="/register/open">Register</a>"#));
    }

    #[tokio::test]
    async fn listing_failure_shows_retry() {
        let mut api = MockEventApi::new();
        api.expect_list_events().returning(|| {
            Err(AppError::UpstreamError { status: 500, message: "Failed to fetch events".to_string() })
        });
        let app = create_router(test_state(api));

        let html = body_text(app.oneshot(get("/")).await.unwrap()).await;
        assert!(html.contains("Failed to fetch events"));
        assert!(html.contains("Try again"));
    }

    #[tokio::test]
    async fn registered_notice_shows_banner() {
        let app = create_router(test_state(listing_api()));

        let html = body_text(app.oneshot(get("/?notice=registered")).await.unwrap()).await;
        assert!(html.contains("Registration Successful"));
    }

    #[tokio::test]
    async fn json_listing_uses_the_envelope() {
        let app = create_router(test_state(listing_api()));

        let response = app.oneshot(get("/api/events")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["_id"], "sold");
        assert_eq!(body["data"][0]["register_action"], "sold_out");
        assert_eq!(body["data"][1]["is_past"], true);
        assert_eq!(body["data"][1]["register_label"], "Event Ended");
    }

    #[tokio::test]
    async fn json_listing_failure_is_a_bad_gateway() {
        let mut api = MockEventApi::new();
        api.expect_list_events().returning(|| {
            Err(AppError::UpstreamError { status: 500, message: "Failed to fetch events".to_string() })
        });
        let app = create_router(test_state(api));

        let response = app.oneshot(get("/api/events")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    }

    #[tokio::test]
    async fn creation_route_is_not_taken_as_an_event_id() {
        let app = create_router(test_state(MockEventApi::new()));

        let html = body_text(app.oneshot(get("/register/events")).await.unwrap()).await;
        assert!(html.contains("Create New Event"));
    }

    #[tokio::test]
    async fn past_date_is_rejected_inline() {
        let mut api = MockEventApi::new();
        api.expect_create_event().never();
        let app = create_router(test_state(api));

        let response = app
            .oneshot(form_post("/register/events", "title=Spring+Fest&date=2026-10-17T10%3A00"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let html = body_text(response).await;
        assert!(html.contains("Event date cannot be in the past"));
        assert!(html.contains(r#"value="Spring Fest""#));
    }

    #[tokio::test]
    async fn created_event_resets_the_form() {
        let mut api = MockEventApi::new();
        api.expect_create_event()
            .times(1)
            .returning(|request| Ok(CreateEventResponse { title: request.title.clone(), id: None }));
        let app = create_router(test_state(api));

        let response = app
            .oneshot(form_post(
                "/register/events",
                "title=Spring+Fest&description=&date=2026-10-19T10%3A00&location=&capacity=",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Event &quot;Spring Fest&quot; has been created!"));
        assert!(!html.contains(r#"value="Spring Fest""#));
    }

    #[tokio::test]
    async fn each_rendered_form_gets_its_own_token() {
        let app = create_router(test_state(MockEventApi::new()));

        let first = body_text(app.clone().oneshot(get("/register/events")).await.unwrap()).await;
        let second = body_text(app.oneshot(get("/register/events")).await.unwrap()).await;

        let token = |html: &str| {
            let marker = r#"name="submission_id" value=""#;
            let start = html.find(marker).unwrap() + marker.len();
            let end = start + html[start..].find('"').unwrap();
            html[start..end].to_string()
        };
        assert_ne!(token(&first), token(&second));
    }

    #[tokio::test]
    async fn resubmitting_an_in_flight_form_conflicts() {
        let mut api = MockEventApi::new();
        api.expect_create_event().never();
        let state = test_state(api);
        let _held = state.event_form_guard.try_acquire("form-1").unwrap();
        let app = create_router(state.clone());

        let response = app
            .oneshot(form_post(
                "/register/events",
                "submission_id=form-1&title=Spring+Fest&date=2026-10-19T10%3A00",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert!(body_text(response).await.contains("A submission is already in progress"));
    }

    #[tokio::test]
    async fn encoded_event_id_reaches_the_api_decoded() {
        let mut api = MockEventApi::new();
        api.expect_register_attendee()
            .withf(|event_id, _| event_id.to_string() == "a/b")
            .times(1)
            .returning(|_, _| Ok(()));
        let app = create_router(test_state(api));

        let page = body_text(app.clone().oneshot(get("/register/a%2Fb")).await.unwrap()).await;
        assert!(page.contains(r#"action="/register/a%2Fb""#));

        let response = app
            .oneshot(form_post("/register/a%2Fb", "submission_id=s1&name=Asha+Rao&phone=5551234567"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn registration_success_redirects_to_listing() {
        let mut api = MockEventApi::new();
        api.expect_register_attendee()
            .withf(|event_id, _| event_id.to_string() == "665f1c")
            .times(1)
            .returning(|_, _| Ok(()));
        let app = create_router(test_state(api));

        let response = app
            .oneshot(form_post("/register/665f1c", "name=Asha+Rao&email=&phone=555-123-4567&location=Pune"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/?notice=registered");
    }

    #[tokio::test]
    async fn registration_failure_keeps_the_form() {
        let mut api = MockEventApi::new();
        api.expect_register_attendee().times(1).returning(|_, _| {
            Err(AppError::UpstreamError { status: 400, message: "Event is full".to_string() })
        });
        let app = create_router(test_state(api));

        let response = app
            .oneshot(form_post("/register/e1", "name=Asha+Rao&phone=5551234567"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Registration Failed"));
        assert!(html.contains("Event is full"));
        assert!(html.contains(r#"value="Asha Rao""#));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = create_router(test_state(MockEventApi::new()));

        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["data"]["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_paths_are_not_found() {
        let app = create_router(test_state(MockEventApi::new()));

        let response = app.oneshot(get("/nope/at/all")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
