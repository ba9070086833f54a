//! Domain layer: poll identity, poll entities, poll storage, and the
//! user registry.
//!
//! This module contains the in-memory domain model. Entities are plain
//! structs with private fields; the store and registry wrap them in
//! `tokio::sync::RwLock` for shared access across request handlers.

pub mod poll;
pub mod poll_id;
pub mod poll_store;
pub mod user_registry;

pub use poll::{Poll, PollResults, PollSummary};
pub use poll_id::PollId;
pub use poll_store::PollStore;
pub use user_registry::UserRegistry;
