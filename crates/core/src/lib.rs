//! Pure domain logic for the job board.
//!
//! Nothing in this crate touches the database or the network; everything
//! here is unit-testable in isolation.

pub mod error;
pub mod pagination;
pub mod roles;
pub mod search;
pub mod slug;
pub mod status;
pub mod types;
pub mod upload;
pub mod validation;
