//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Plain confirmation message returned by mutating endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

impl MessageResponse {
    /// Builds a response from anything displayable.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Username query parameter for filtered poll listings.
///
/// `username` is optional at the extractor level so a missing parameter
/// can be reported as a 400 instead of an extractor rejection.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct UsernameQuery {
    /// Username to filter by.
    pub username: Option<String>,
}
