//! Poll service: orchestrates poll lifecycle and vote validation.

use std::sync::Arc;

use crate::domain::{Poll, PollId, PollResults, PollStore, PollSummary, UserRegistry};
use crate::error::ServiceError;

/// Orchestration layer for all poll operations.
///
/// Stateless coordinator: owns references to [`PollStore`] for poll state
/// and [`UserRegistry`] for membership checks. Every mutation method
/// follows the pattern: check membership → acquire lock → mutate entity →
/// return result.
///
/// The creator-must-be-registered and voter-must-be-registered checks are
/// enforced here rather than at the HTTP boundary, so the service contract
/// holds no matter which boundary drives it.
#[derive(Debug, Clone)]
pub struct PollService {
    store: Arc<PollStore>,
    users: Arc<UserRegistry>,
}

impl PollService {
    /// Creates a new `PollService`.
    #[must_use]
    pub fn new(store: Arc<PollStore>, users: Arc<UserRegistry>) -> Self {
        Self { store, users }
    }

    /// Returns a reference to the inner [`PollStore`].
    #[must_use]
    pub fn store(&self) -> &Arc<PollStore> {
        &self.store
    }

    /// Creates a poll and inserts it into the store.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRequest`] when the creator is not a
    /// registered user or the question/options fail entity validation.
    pub async fn create_poll(
        &self,
        question: &str,
        options: &[String],
        creator: &str,
    ) -> Result<PollId, ServiceError> {
        let creator = creator.trim();
        if !self.users.exists(creator).await {
            return Err(ServiceError::InvalidRequest(format!(
                "creator '{creator}' is not a registered user"
            )));
        }

        let poll = Poll::new(question, options, creator)?;
        let poll_id = self.store.insert(poll).await;

        tracing::info!(%poll_id, creator, "poll created");
        Ok(poll_id)
    }

    /// Casts a vote for the option at `position` in the given poll.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PollNotFound`] when the poll does not exist,
    /// [`ServiceError::InvalidRequest`] when the voter is not registered,
    /// and otherwise propagates [`Poll::cast_vote`] failures unchanged.
    pub async fn vote(
        &self,
        poll_id: PollId,
        position: i64,
        voter: &str,
    ) -> Result<(), ServiceError> {
        let voter = voter.trim();
        if !self.users.exists(voter).await {
            return Err(ServiceError::InvalidRequest(format!(
                "voter '{voter}' is not a registered user"
            )));
        }

        let poll_lock = self
            .store
            .get(poll_id)
            .await
            .ok_or_else(|| ServiceError::PollNotFound(*poll_id.as_uuid()))?;
        let mut poll = poll_lock.write().await;
        poll.cast_vote(position, voter)?;

        tracing::info!(%poll_id, voter, position, "vote cast");
        Ok(())
    }

    /// Returns summaries of all polls, in unspecified order.
    pub async fn list_polls(&self) -> Vec<PollSummary> {
        let polls = self.store.get_all().await;
        let mut summaries = Vec::with_capacity(polls.len());
        for poll_lock in polls {
            let poll = poll_lock.read().await;
            summaries.push(PollSummary::from(&*poll));
        }
        summaries
    }

    /// Returns summaries of all polls created by `username`.
    pub async fn list_by_creator(&self, username: &str) -> Vec<PollSummary> {
        let polls = self.store.get_all().await;
        let mut summaries = Vec::new();
        for poll_lock in polls {
            let poll = poll_lock.read().await;
            if poll.creator() == username {
                summaries.push(PollSummary::from(&*poll));
            }
        }
        summaries
    }

    /// Returns summaries of all polls in which `username` has voted.
    pub async fn list_voted_by_user(&self, username: &str) -> Vec<PollSummary> {
        let polls = self.store.get_all().await;
        let mut summaries = Vec::new();
        for poll_lock in polls {
            let poll = poll_lock.read().await;
            if poll.has_voted(username) {
                summaries.push(PollSummary::from(&*poll));
            }
        }
        summaries
    }

    /// Returns the question and current tally for a poll.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PollNotFound`] when the poll does not exist.
    pub async fn get_results(&self, poll_id: PollId) -> Result<PollResults, ServiceError> {
        let poll_lock = self
            .store
            .get(poll_id)
            .await
            .ok_or_else(|| ServiceError::PollNotFound(*poll_id.as_uuid()))?;
        let poll = poll_lock.read().await;
        Ok(PollResults::from(&*poll))
    }

    /// Deletes a poll on behalf of `requester`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PollNotFound`] when the poll does not exist
    /// and [`ServiceError::NotCreator`] when `requester` is not the poll's
    /// creator. On failure the store is left unchanged.
    pub async fn delete_poll(&self, poll_id: PollId, requester: &str) -> Result<(), ServiceError> {
        let requester = requester.trim();
        let poll_lock = self
            .store
            .get(poll_id)
            .await
            .ok_or_else(|| ServiceError::PollNotFound(*poll_id.as_uuid()))?;
        {
            let poll = poll_lock.read().await;
            if poll.creator() != requester {
                return Err(ServiceError::NotCreator(*poll_id.as_uuid()));
            }
        }

        self.store.remove(poll_id).await;
        tracing::info!(%poll_id, requester, "poll deleted");
        Ok(())
    }
}
