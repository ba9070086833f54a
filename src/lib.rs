//! # quickpoll
//!
//! In-memory polling REST service. Users are registered by name, polls are
//! created with a question and a fixed set of answer options, and registered
//! users may cast one vote each per poll. Only a poll's creator may delete it.
//!
//! All state lives in process memory; nothing survives a restart.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── PollService (service/)
//!     │
//!     ├── PollStore (domain/)
//!     ├── UserRegistry (domain/)
//!     └── Poll entities (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
