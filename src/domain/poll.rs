//! Poll entity: question, fixed option list, vote tally, and voter set.
//!
//! Fields are private; all reads go through accessors and the only mutation
//! path is [`Poll::cast_vote`]. This keeps the entity invariants local:
//! `total_votes` always equals both the voter-set size and the sum of the
//! tally counts.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::PollId;
use crate::error::ServiceError;

/// A poll: a question with a fixed, ordered list of answer options.
///
/// Options are referenced by zero-based position, not by text. The tally is
/// keyed by option text, so two options with identical text share a tally
/// bucket. The option list is fixed at construction and never mutated.
#[derive(Debug, Clone)]
pub struct Poll {
    id: PollId,
    question: String,
    options: Vec<String>,
    tally: HashMap<String, u64>,
    total_votes: u64,
    creator: String,
    voters: HashSet<String>,
    created_at: DateTime<Utc>,
}

impl Poll {
    /// Creates a new poll with a fresh [`PollId`].
    ///
    /// The question, every option, and the creator name are stored trimmed.
    /// The tally starts at zero for every option.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRequest`] when the question or creator
    /// is empty after trimming, fewer than two options are given, or any
    /// option is empty after trimming.
    pub fn new(question: &str, options: &[String], creator: &str) -> Result<Self, ServiceError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ServiceError::InvalidRequest(
                "question must not be empty".to_string(),
            ));
        }

        if options.len() < 2 {
            return Err(ServiceError::InvalidRequest(
                "a poll needs at least 2 options".to_string(),
            ));
        }
        let mut trimmed = Vec::with_capacity(options.len());
        for option in options {
            let option = option.trim();
            if option.is_empty() {
                return Err(ServiceError::InvalidRequest(
                    "options must not be empty".to_string(),
                ));
            }
            trimmed.push(option.to_string());
        }

        let creator = creator.trim();
        if creator.is_empty() {
            return Err(ServiceError::InvalidRequest(
                "creator must not be empty".to_string(),
            ));
        }

        let tally = trimmed.iter().map(|o| (o.clone(), 0)).collect();

        Ok(Self {
            id: PollId::new(),
            question: question.to_string(),
            options: trimmed,
            tally,
            total_votes: 0,
            creator: creator.to_string(),
            voters: HashSet::new(),
            created_at: Utc::now(),
        })
    }

    /// Records one vote for the option at `position` by `voter`.
    ///
    /// Atomic per call: on any failure the tally, vote count, and voter set
    /// are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::OptionOutOfRange`] when `position` is not in
    /// `[0, option_count)`, and [`ServiceError::AlreadyVoted`] when `voter`
    /// has already voted in this poll.
    pub fn cast_vote(&mut self, position: i64, voter: &str) -> Result<(), ServiceError> {
        let out_of_range = || ServiceError::OptionOutOfRange {
            position,
            option_count: self.options.len(),
        };
        let idx = usize::try_from(position).map_err(|_| out_of_range())?;
        let option = self.options.get(idx).ok_or_else(out_of_range)?.clone();

        if self.voters.contains(voter) {
            return Err(ServiceError::AlreadyVoted {
                poll_id: *self.id.as_uuid(),
                voter: voter.to_string(),
            });
        }

        self.tally
            .entry(option)
            .and_modify(|count| *count = count.saturating_add(1))
            .or_insert(1);
        self.total_votes = self.total_votes.saturating_add(1);
        self.voters.insert(voter.to_string());
        Ok(())
    }

    /// Returns `true` if `voter` has already voted in this poll.
    #[must_use]
    pub fn has_voted(&self, voter: &str) -> bool {
        self.voters.contains(voter)
    }

    /// The poll's unique identifier.
    #[must_use]
    pub const fn id(&self) -> PollId {
        self.id
    }

    /// The poll question.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The ordered option list.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Per-option vote counts, keyed by option text.
    #[must_use]
    pub const fn tally(&self) -> &HashMap<String, u64> {
        &self.tally
    }

    /// Total number of votes cast.
    #[must_use]
    pub const fn total_votes(&self) -> u64 {
        self.total_votes
    }

    /// Username of the poll's creator.
    #[must_use]
    pub fn creator(&self) -> &str {
        &self.creator
    }

    /// Set of usernames that have voted.
    #[must_use]
    pub const fn voters(&self) -> &HashSet<String> {
        &self.voters
    }

    /// Server-side creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Snapshot of a poll for list endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PollSummary {
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
    /// Per-option vote counts.
    pub tally: HashMap<String, u64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&Poll> for PollSummary {
    fn from(poll: &Poll) -> Self {
        Self {
            id: poll.id,
            question: poll.question.clone(),
            options: poll.options.clone(),
            creator: poll.creator.clone(),
            total_votes: poll.total_votes,
            tally: poll.tally.clone(),
            created_at: poll.created_at,
        }
    }
}

/// Result view of a poll: question plus the current tally.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PollResults {
    /// Poll question.
    pub question: String,
    /// Total number of votes cast.
    pub total_votes: u64,
    /// Per-option vote counts.
    pub tally: HashMap<String, u64>,
}

impl From<&Poll> for PollResults {
    fn from(poll: &Poll) -> Self {
        Self {
            question: poll.question.clone(),
            total_votes: poll.total_votes,
            tally: poll.tally.clone(),
        }
    }
}
