//! Job posting model and DTOs.

use jobboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `jobs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Job {
    pub id: DbId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub category: Option<String>,
    pub description: String,
    pub requirements: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_currency: String,
    pub is_remote: bool,
    pub status: String,
    pub posted_by: Option<DbId>,
    pub deadline: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a job posting.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: Option<String>,
    pub category: Option<String>,
    pub description: String,
    pub requirements: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_currency: Option<String>,
    pub is_remote: Option<bool>,
    pub status: Option<String>,
    pub deadline: Option<Timestamp>,
}

/// DTO for patching a job posting. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateJob {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_currency: Option<String>,
    pub is_remote: Option<bool>,
    pub status: Option<String>,
    pub deadline: Option<Timestamp>,
}

/// Search criteria for job listings. `None` fields do not filter.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Case-insensitive substring matched against title, company and description.
    pub q: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub category: Option<String>,
    pub is_remote: Option<bool>,
    pub status: Option<String>,
}
