//! User-related DTOs for registration and listing.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// Name to register. Trimmed before storage; must be non-empty.
    pub username: String,
}

/// Response body for `GET /users`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    /// All registered usernames, in lexicographic order.
    pub users: Vec<String>,
}
