//! Staffing inquiry (contact form) model and DTOs.

use jobboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `staffing_inquiries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StaffingInquiry {
    pub id: DbId,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub positions_needed: i32,
    pub message: Option<String>,
    pub status: String,
    pub admin_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for a contact-form submission.
#[derive(Debug, Clone)]
pub struct CreateInquiry {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub positions_needed: i32,
    pub message: Option<String>,
}

/// DTO for an admin updating an inquiry.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateInquiry {
    pub status: Option<String>,
    pub admin_notes: Option<String>,
}
