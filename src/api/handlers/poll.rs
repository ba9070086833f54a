//! Poll handlers: create, list, filter, vote, results, delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};

use crate::api::dto::{
    CreatePollRequest, CreatePollResponse, DeletePollRequest, MessageResponse, PollResultsResponse,
    PollSummaryDto, UsernameQuery, VoteRequest,
};
use crate::app_state::AppState;
use crate::domain::PollId;
use crate::error::{ErrorResponse, ServiceError};

/// `POST /polls` — Create a new poll.
///
/// # Errors
///
/// Returns [`ServiceError`] when a field is missing/blank, fewer than two
/// options are given, or the creator is not a registered user.
#[utoipa::path(
    post,
    path = "/polls",
    tag = "Polls",
    summary = "Create a poll",
    description = "Creates a poll with a question and a fixed ordered option list (at least 2 options). The creator must be a registered user.",
    request_body = CreatePollRequest,
    responses(
        (status = 201, description = "Poll created", body = CreatePollResponse),
        (status = 400, description = "Invalid request or unregistered creator", body = ErrorResponse),
    )
)]
pub async fn create_poll(
    State(state): State<AppState>,
    Json(req): Json<CreatePollRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let poll_id = state
        .poll_service
        .create_poll(&req.question, &req.options, &req.username)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePollResponse {
            message: format!("poll {poll_id} created"),
            poll_id,
        }),
    ))
}

/// `GET /polls` — List all polls.
#[utoipa::path(
    get,
    path = "/polls",
    tag = "Polls",
    summary = "List polls",
    description = "Returns summaries of every poll, or a message when none exist yet.",
    responses(
        (status = 200, description = "An array of PollSummaryDto when polls exist; a MessageResponse when the store is empty", body = serde_json::Value),
    )
)]
pub async fn list_polls(State(state): State<AppState>) -> Response {
    let summaries = state.poll_service.list_polls().await;
    if summaries.is_empty() {
        return Json(MessageResponse::new("no polls have been created yet")).into_response();
    }
    let data: Vec<PollSummaryDto> = summaries.into_iter().map(Into::into).collect();
    Json(data).into_response()
}

/// `GET /polls/creator?username=` — List polls created by a user.
///
/// # Errors
///
/// Returns [`ServiceError`] when the query parameter is missing or no
/// polls match.
#[utoipa::path(
    get,
    path = "/polls/creator",
    tag = "Polls",
    summary = "List polls by creator",
    description = "Returns summaries of every poll created by the given username.",
    params(UsernameQuery),
    responses(
        (status = 200, description = "Matching polls", body = [PollSummaryDto]),
        (status = 400, description = "Missing username parameter", body = ErrorResponse),
        (status = 404, description = "No polls by this creator", body = ErrorResponse),
    )
)]
pub async fn polls_by_creator(
    State(state): State<AppState>,
    Query(query): Query<UsernameQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let username = query.username.ok_or_else(|| {
        ServiceError::InvalidRequest("missing username query parameter".to_string())
    })?;

    let summaries = state.poll_service.list_by_creator(&username).await;
    if summaries.is_empty() {
        return Err(ServiceError::NoPollsFound(username));
    }
    let data: Vec<PollSummaryDto> = summaries.into_iter().map(Into::into).collect();
    Ok(Json(data))
}

/// `GET /polls/voter?username=` — List polls a user has voted in.
///
/// # Errors
///
/// Returns [`ServiceError`] when the query parameter is missing or no
/// polls match.
#[utoipa::path(
    get,
    path = "/polls/voter",
    tag = "Polls",
    summary = "List polls by voter",
    description = "Returns summaries of every poll the given username has voted in.",
    params(UsernameQuery),
    responses(
        (status = 200, description = "Matching polls", body = [PollSummaryDto]),
        (status = 400, description = "Missing username parameter", body = ErrorResponse),
        (status = 404, description = "No polls voted in by this user", body = ErrorResponse),
    )
)]
pub async fn polls_by_voter(
    State(state): State<AppState>,
    Query(query): Query<UsernameQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let username = query.username.ok_or_else(|| {
        ServiceError::InvalidRequest("missing username query parameter".to_string())
    })?;

    let summaries = state.poll_service.list_voted_by_user(&username).await;
    if summaries.is_empty() {
        return Err(ServiceError::NoPollsFound(username));
    }
    let data: Vec<PollSummaryDto> = summaries.into_iter().map(Into::into).collect();
    Ok(Json(data))
}

/// `POST /polls/{id}/vote` — Cast a vote in a poll.
///
/// # Errors
///
/// Returns [`ServiceError`] when the poll does not exist, the voter is
/// unregistered or has already voted, or the option is out of range.
#[utoipa::path(
    post,
    path = "/polls/{id}/vote",
    tag = "Polls",
    summary = "Cast a vote",
    description = "Records one vote by a registered user for the option at the given zero-based position. Each user may vote once per poll.",
    params(
        ("id" = uuid::Uuid, Path, description = "Poll UUID"),
    ),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Vote recorded", body = MessageResponse),
        (status = 400, description = "Invalid option, duplicate vote, or unregistered voter", body = ErrorResponse),
        (status = 404, description = "Poll not found", body = ErrorResponse),
    )
)]
pub async fn cast_vote(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<VoteRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let poll_id = PollId::from_uuid(id);
    state
        .poll_service
        .vote(poll_id, req.option, &req.username)
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "vote by '{}' recorded in poll {poll_id}",
        req.username.trim()
    ))))
}

/// `GET /polls/{id}/results` — Current results for a poll.
///
/// # Errors
///
/// Returns [`ServiceError::PollNotFound`] when the poll does not exist.
#[utoipa::path(
    get,
    path = "/polls/{id}/results",
    tag = "Polls",
    summary = "Get poll results",
    description = "Returns the question, total vote count, and per-option tally.",
    params(
        ("id" = uuid::Uuid, Path, description = "Poll UUID"),
    ),
    responses(
        (status = 200, description = "Current results", body = PollResultsResponse),
        (status = 404, description = "Poll not found", body = ErrorResponse),
    )
)]
pub async fn poll_results(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let results = state.poll_service.get_results(PollId::from_uuid(id)).await?;
    Ok(Json(PollResultsResponse::from(results)))
}

/// `DELETE /polls/{id}` — Delete a poll (creator only).
///
/// # Errors
///
/// Returns [`ServiceError`] when the poll does not exist or the requester
/// is not its creator.
#[utoipa::path(
    delete,
    path = "/polls/{id}",
    tag = "Polls",
    summary = "Delete a poll",
    description = "Removes a poll. Only the poll's creator may delete it.",
    params(
        ("id" = uuid::Uuid, Path, description = "Poll UUID"),
    ),
    request_body = DeletePollRequest,
    responses(
        (status = 200, description = "Poll deleted", body = MessageResponse),
        (status = 403, description = "Requester is not the creator", body = ErrorResponse),
        (status = 404, description = "Poll not found", body = ErrorResponse),
    )
)]
pub async fn delete_poll(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<DeletePollRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let poll_id = PollId::from_uuid(id);
    state.poll_service.delete_poll(poll_id, &req.username).await?;

    Ok(Json(MessageResponse::new(format!(
        "poll {poll_id} deleted"
    ))))
}

/// Poll routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/polls", post(create_poll).get(list_polls))
        .route("/polls/creator", get(polls_by_creator))
        .route("/polls/voter", get(polls_by_voter))
        .route("/polls/{id}/vote", post(cast_vote))
        .route("/polls/{id}/results", get(poll_results))
        .route("/polls/{id}", delete(delete_poll))
}
