//! Job application model and DTOs.

use jobboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Application {
    pub id: DbId,
    pub job_id: DbId,
    pub user_id: DbId,
    pub cover_letter: Option<String>,
    pub resume_path: Option<String>,
    pub status: String,
    pub admin_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An application joined with its job title and applicant identity.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicationDetail {
    pub id: DbId,
    pub job_id: DbId,
    pub job_title: String,
    pub company: String,
    pub user_id: DbId,
    pub applicant_name: String,
    pub applicant_email: String,
    pub cover_letter: Option<String>,
    pub resume_path: Option<String>,
    pub status: String,
    pub admin_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting an application.
#[derive(Debug, Clone)]
pub struct CreateApplication {
    pub job_id: DbId,
    pub user_id: DbId,
    pub cover_letter: Option<String>,
    pub resume_path: Option<String>,
}

/// DTO for an admin changing an application's status.
#[derive(Debug, Deserialize)]
pub struct UpdateApplicationStatus {
    pub status: String,
    pub admin_notes: Option<String>,
}

/// Filter for admin application listings.
#[derive(Debug, Clone, Default)]
pub struct ApplicationFilter {
    pub job_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub status: Option<String>,
}
