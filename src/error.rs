//! Service error types with HTTP status code mapping.
//!
//! [`ServiceError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "invalid request: question must not be empty",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`ServiceError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category             | HTTP Status                |
/// |-----------|----------------------|----------------------------|
/// | 1000–1999 | Validation/Conflict  | 400 Bad Request            |
/// | 2000–2099 | Not Found            | 404 Not Found              |
/// | 2100–2199 | Authorization        | 403 Forbidden              |
/// | 3000–3999 | Server               | 500 Internal Server Error  |
///
/// Duplicate-username and duplicate-vote conflicts are reported as
/// 400 Bad Request rather than 409, matching the public API contract.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Request validation failed (missing or malformed input).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Username is already registered.
    #[error("username already taken: {0}")]
    DuplicateUser(String),

    /// The voter has already cast a vote in this poll.
    #[error("user {voter} has already voted in poll {poll_id}")]
    AlreadyVoted {
        /// Poll the duplicate vote targeted.
        poll_id: uuid::Uuid,
        /// Username that already voted.
        voter: String,
    },

    /// Vote option position is outside the poll's option list.
    #[error("option {position} is out of range; poll has {option_count} options")]
    OptionOutOfRange {
        /// Requested zero-based option position.
        position: i64,
        /// Number of options the poll actually has.
        option_count: usize,
    },

    /// Poll with the given ID was not found.
    #[error("poll not found: {0}")]
    PollNotFound(uuid::Uuid),

    /// A filtered poll query matched nothing.
    #[error("no polls found for user: {0}")]
    NoPollsFound(String),

    /// Delete was attempted by a user other than the poll's creator.
    #[error("only the creator may delete poll {0}")]
    NotCreator(uuid::Uuid),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::DuplicateUser(_) => 1002,
            Self::AlreadyVoted { .. } => 1003,
            Self::OptionOutOfRange { .. } => 1004,
            Self::PollNotFound(_) => 2001,
            Self::NoPollsFound(_) => 2002,
            Self::NotCreator(_) => 2101,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_)
            | Self::DuplicateUser(_)
            | Self::AlreadyVoted { .. }
            | Self::OptionOutOfRange { .. } => StatusCode::BAD_REQUEST,
            Self::PollNotFound(_) | Self::NoPollsFound(_) => StatusCode::NOT_FOUND,
            Self::NotCreator(_) => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
