//! Data Transfer Objects for REST request/response serialization.

pub mod common_dto;
pub mod poll_dto;
pub mod user_dto;

pub use common_dto::*;
pub use poll_dto::*;
pub use user_dto::*;
