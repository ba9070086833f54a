//! Concurrent poll storage with per-poll fine-grained locking.
//!
//! [`PollStore`] keeps all polls in a `HashMap` where each entry is
//! individually protected by a [`tokio::sync::RwLock`]. Concurrent reads
//! on the same poll and concurrent votes on different polls proceed in
//! parallel; votes on the same poll are serialized.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::PollId;
use super::poll::Poll;

/// Keyed collection of polls, addressable by [`PollId`].
///
/// Uses a `RwLock<HashMap<...>>` for the outer map and per-entry
/// `Arc<RwLock<Poll>>` for fine-grained per-poll locking.
#[derive(Debug)]
pub struct PollStore {
    polls: RwLock<HashMap<PollId, Arc<RwLock<Poll>>>>,
}

impl PollStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            polls: RwLock::new(HashMap::new()),
        }
    }

    /// Stores a poll by its identifier, returning the id.
    ///
    /// Upsert semantics: an existing poll with the same id is replaced
    /// (should never happen with UUID v4).
    pub async fn insert(&self, poll: Poll) -> PollId {
        let id = poll.id();
        let mut map = self.polls.write().await;
        map.insert(id, Arc::new(RwLock::new(poll)));
        id
    }

    /// Returns a shared handle to the poll behind its per-poll lock, or
    /// `None` if no poll with the given id exists.
    pub async fn get(&self, id: PollId) -> Option<Arc<RwLock<Poll>>> {
        let map = self.polls.read().await;
        map.get(&id).cloned()
    }

    /// Returns handles to all stored polls, in unspecified order.
    pub async fn get_all(&self) -> Vec<Arc<RwLock<Poll>>> {
        let map = self.polls.read().await;
        map.values().cloned().collect()
    }

    /// Removes a poll from the store.
    ///
    /// Returns `true` if a poll was removed, `false` if the id was absent
    /// (absence is not an error).
    pub async fn remove(&self, id: PollId) -> bool {
        let mut map = self.polls.write().await;
        map.remove(&id).is_some()
    }

    /// Returns the number of stored polls.
    pub async fn len(&self) -> usize {
        self.polls.read().await.len()
    }

    /// Returns `true` if the store contains no polls.
    pub async fn is_empty(&self) -> bool {
        self.polls.read().await.is_empty()
    }
}

impl Default for PollStore {
    fn default() -> Self {
        Self::new()
    }
}
