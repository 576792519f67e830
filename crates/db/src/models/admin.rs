//! Staff account model and DTOs.

use jobboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full admin row from the `admins` table.
///
/// Contains the password hash; use [`AdminResponse`] for API output.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe admin representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct AdminResponse {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<&Admin> for AdminResponse {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            full_name: admin.full_name.clone(),
            email: admin.email.clone(),
            role: admin.role.clone(),
            is_active: admin.is_active,
            last_login_at: admin.last_login_at,
            created_at: admin.created_at,
        }
    }
}

/// DTO for creating a new admin.
#[derive(Debug)]
pub struct CreateAdmin {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// DTO for updating an admin. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAdmin {
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}
