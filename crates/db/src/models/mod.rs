//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod admin;
pub mod application;
pub mod blog_post;
pub mod inquiry;
pub mod job;
pub mod notification;
pub mod session;
pub mod stats;
pub mod testimonial;
pub mod user;
pub mod vacancy;
