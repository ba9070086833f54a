//! Type-safe poll identifier.
//!
//! [`PollId`] is a newtype wrapper around [`uuid::Uuid`] (v4) so poll
//! identifiers cannot be confused with other UUIDs. Uniqueness is
//! probabilistic, as good as the generator provides.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a poll.
///
/// Wraps a UUID v4, generated once at poll creation time and immutable
/// thereafter. Used as the dictionary key in [`super::PollStore`] and as
/// the path parameter in vote, results, and delete endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PollId(uuid::Uuid);

impl PollId {
    /// Creates a new random `PollId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Creates a `PollId` from an existing [`uuid::Uuid`].
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner [`uuid::Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for PollId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<uuid::Uuid> for PollId {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}

impl From<PollId> for uuid::Uuid {
    fn from(id: PollId) -> Self {
        id.0
    }
}
