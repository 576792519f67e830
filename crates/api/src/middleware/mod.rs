//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- any caller with a valid Bearer token.
//! - [`rbac::RequireUser`] -- job seekers only.
//! - [`rbac::RequireAdmin`] -- `admin` or `super_admin`.
//! - [`rbac::RequireSuperAdmin`] -- `super_admin` only.

pub mod auth;
pub mod rbac;
