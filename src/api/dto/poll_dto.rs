//! Poll-related DTOs for create, vote, results, list, and delete.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{PollId, PollResults, PollSummary};

/// Request body for `POST /polls`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePollRequest {
    /// Poll question.
    pub question: String,
    /// Answer options, in display order. At least 2 required.
    pub options: Vec<String>,
    /// Username of the creator. Must be a registered user.
    pub username: String,
}

/// Response body for `POST /polls` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatePollResponse {
    /// Confirmation message containing the new poll id.
    pub message: String,
    /// Identifier of the created poll.
    pub poll_id: PollId,
}

/// Request body for `POST /polls/{id}/vote`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VoteRequest {
    /// Zero-based position of the chosen option.
    pub option: i64,
    /// Username of the voter. Must be a registered user.
    pub username: String,
}

/// Request body for `DELETE /polls/{id}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DeletePollRequest {
    /// Username of the requester. Must match the poll's creator.
    pub username: String,
}

/// Poll summary for list responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct PollSummaryDto {
    /// Poll identifier.
    pub id: PollId,
    /// Poll question.
    pub question: String,
    /// Ordered option list.
    pub options: Vec<String>,
    /// Username of the creator.
    pub creator: String,
    /// Total number of votes cast.
    pub total_votes: u64,
    /// Per-option vote counts keyed by option text.
    pub tally: HashMap<String, u64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<PollSummary> for PollSummaryDto {
    fn from(summary: PollSummary) -> Self {
        Self {
            id: summary.id,
            question: summary.question,
            options: summary.options,
            creator: summary.creator,
            total_votes: summary.total_votes,
            tally: summary.tally,
            created_at: summary.created_at,
        }
    }
}

/// Response body for `GET /polls/{id}/results`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PollResultsResponse {
    /// Poll question.
    pub question: String,
    /// Total number of votes cast.
    pub total_votes: u64,
    /// Per-option vote counts keyed by option text.
    pub tally: HashMap<String, u64>,
}

impl From<PollResults> for PollResultsResponse {
    fn from(results: PollResults) -> Self {
        Self {
            question: results.question,
            total_votes: results.total_votes,
            tally: results.tally,
        }
    }
}
