//! User handlers: registration and listing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{MessageResponse, RegisterUserRequest, UserListResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, ServiceError};

/// `POST /users` — Register a new username.
///
/// # Errors
///
/// Returns [`ServiceError`] when the name is blank or already taken.
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    summary = "Register a user",
    description = "Registers a username. Names are trimmed, case-sensitive, and must be unique.",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 400, description = "Blank or duplicate username", body = ErrorResponse),
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let name = state.user_registry.register(&req.username).await?;
    tracing::info!(username = %name, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!("user '{name}' registered"))),
    ))
}

/// `GET /users` — List all registered usernames.
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    summary = "List users",
    description = "Returns all registered usernames in lexicographic order.",
    responses(
        (status = 200, description = "Registered usernames", body = UserListResponse),
    )
)]
pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    let users = state.user_registry.list_all().await;
    Json(UserListResponse { users })
}

/// User routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users", post(register_user).get(list_users))
}
