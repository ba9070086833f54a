//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All endpoints are mounted at the root path.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::user::register_user,
        handlers::user::list_users,
        handlers::poll::create_poll,
        handlers::poll::list_polls,
        handlers::poll::polls_by_creator,
        handlers::poll::polls_by_voter,
        handlers::poll::cast_vote,
        handlers::poll::poll_results,
        handlers::poll::delete_poll,
        handlers::system::health_handler,
    ),
    tags(
        (name = "Users", description = "Username registration and listing"),
        (name = "Polls", description = "Poll lifecycle, voting, and results"),
        (name = "System", description = "Health and diagnostics"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::build_router;
    use crate::app_state::AppState;

    fn test_app() -> Router {
        build_router().with_state(AppState::new())
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        };
        let Ok(request) = request else {
            panic!("request construction failed");
        };
        let Ok(response) = app.clone().oneshot(request).await else {
            panic!("request dispatch failed");
        };
        let status = response.status();
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), 1024 * 1024).await else {
            panic!("body read failed");
        };
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn register(app: &Router, name: &str) {
        let (status, _) = send(app, "POST", "/users", Some(json!({"username": name}))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    async fn create_poll(app: &Router, creator: &str) -> String {
        let body = json!({
            "question": "Tea or Coffee?",
            "options": ["Tea", "Coffee"],
            "username": creator,
        });
        let (status, value) = send(app, "POST", "/polls", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        let Some(id) = value.get("poll_id").and_then(Value::as_str) else {
            panic!("response missing poll_id");
        };
        id.to_string()
    }

    #[tokio::test]
    async fn register_user_then_duplicate() {
        let app = test_app();
        register(&app, "alice").await;

        let (status, value) =
            send(&app, "POST", "/users", Some(json!({"username": "alice"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            value.pointer("/error/code").and_then(Value::as_u64),
            Some(1002)
        );
    }

    #[tokio::test]
    async fn register_blank_username_is_rejected() {
        let app = test_app();
        let (status, _) = send(&app, "POST", "/users", Some(json!({"username": "   "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_users_is_sorted() {
        let app = test_app();
        register(&app, "bob").await;
        register(&app, "alice").await;

        let (status, value) = send(&app, "GET", "/users", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value.get("users"), Some(&json!(["alice", "bob"])));
    }

    #[tokio::test]
    async fn empty_poll_list_returns_message() {
        let app = test_app();
        let (status, value) = send(&app, "GET", "/polls", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(value.get("message").is_some());
    }

    #[tokio::test]
    async fn create_requires_registered_creator() {
        let app = test_app();
        let body = json!({
            "question": "Tea or Coffee?",
            "options": ["Tea", "Coffee"],
            "username": "ghost",
        });
        let (status, _) = send(&app, "POST", "/polls", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn vote_and_results_scenario() {
        let app = test_app();
        register(&app, "alice").await;
        register(&app, "bob").await;
        let id = create_poll(&app, "alice").await;

        let (status, _) = send(
            &app,
            "POST",
            &format!("/polls/{id}/vote"),
            Some(json!({"option": 1, "username": "bob"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, value) = send(&app, "GET", &format!("/polls/{id}/results"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            value.get("question").and_then(Value::as_str),
            Some("Tea or Coffee?")
        );
        assert_eq!(value.get("total_votes").and_then(Value::as_u64), Some(1));
        assert_eq!(value.pointer("/tally/Tea").and_then(Value::as_u64), Some(0));
        assert_eq!(
            value.pointer("/tally/Coffee").and_then(Value::as_u64),
            Some(1)
        );
    }

    #[tokio::test]
    async fn vote_out_of_range_is_400() {
        let app = test_app();
        register(&app, "alice").await;
        register(&app, "bob").await;
        let id = create_poll(&app, "alice").await;

        let (status, value) = send(
            &app,
            "POST",
            &format!("/polls/{id}/vote"),
            Some(json!({"option": 7, "username": "bob"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            value.pointer("/error/code").and_then(Value::as_u64),
            Some(1004)
        );
    }

    #[tokio::test]
    async fn vote_on_unknown_poll_is_404() {
        let app = test_app();
        register(&app, "bob").await;

        let id = uuid::Uuid::new_v4();
        let (status, _) = send(
            &app,
            "POST",
            &format!("/polls/{id}/vote"),
            Some(json!({"option": 0, "username": "bob"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn creator_filter_requires_username() {
        let app = test_app();
        let (status, _) = send(&app, "GET", "/polls/creator", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn creator_filter_404_when_no_matches() {
        let app = test_app();
        let (status, _) = send(&app, "GET", "/polls/creator?username=nobody", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn creator_and_voter_filters_match() {
        let app = test_app();
        register(&app, "alice").await;
        register(&app, "bob").await;
        let id = create_poll(&app, "alice").await;
        let (status, _) = send(
            &app,
            "POST",
            &format!("/polls/{id}/vote"),
            Some(json!({"option": 0, "username": "bob"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, value) = send(&app, "GET", "/polls/creator?username=alice", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value.as_array().map(Vec::len), Some(1));

        let (status, value) = send(&app, "GET", "/polls/voter?username=bob", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn delete_is_creator_only() {
        let app = test_app();
        register(&app, "alice").await;
        let id = create_poll(&app, "alice").await;

        let (status, _) = send(
            &app,
            "DELETE",
            &format!("/polls/{id}"),
            Some(json!({"username": "mallory"})),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        // Poll is still retrievable after the rejected delete.
        let (status, _) = send(&app, "GET", &format!("/polls/{id}/results"), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            &app,
            "DELETE",
            &format!("/polls/{id}"),
            Some(json!({"username": "alice"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, "GET", &format!("/polls/{id}/results"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_unknown_poll_is_404() {
        let app = test_app();
        let id = uuid::Uuid::new_v4();
        let (status, _) = send(
            &app,
            "DELETE",
            &format!("/polls/{id}"),
            Some(json!({"username": "alice"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let app = test_app();
        let (status, value) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            value.get("status").and_then(Value::as_str),
            Some("healthy")
        );
    }
}
