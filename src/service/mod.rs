//! Service layer: business logic orchestration.
//!
//! [`PollService`] coordinates poll lifecycle operations across the
//! [`crate::domain::PollStore`] and [`crate::domain::UserRegistry`].

pub mod poll_service;

pub use poll_service::PollService;
