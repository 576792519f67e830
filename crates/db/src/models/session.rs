//! Refresh-token session model and DTOs.

use jobboard_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `auth_sessions` table.
///
/// `subject_role` is `"user"` or `"admin"` and selects the table
/// `subject_id` points into.
#[derive(Debug, Clone, FromRow)]
pub struct AuthSession {
    pub id: DbId,
    pub subject_role: String,
    pub subject_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub subject_role: String,
    pub subject_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
