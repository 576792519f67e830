//! Employer-submitted vacancy model and DTOs.

use jobboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `vacancies` table.
///
/// `job_id` is set once an admin publishes the vacancy as a job posting.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vacancy {
    pub id: DbId,
    pub company_name: String,
    pub contact_email: String,
    pub title: String,
    pub location: String,
    pub job_type: String,
    pub description: String,
    pub openings: i32,
    pub status: String,
    pub job_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for an employer submitting a vacancy.
#[derive(Debug, Clone)]
pub struct CreateVacancy {
    pub company_name: String,
    pub contact_email: String,
    pub title: String,
    pub location: String,
    pub job_type: String,
    pub description: String,
    pub openings: i32,
}

/// DTO for an admin changing a vacancy's review status.
#[derive(Debug, Deserialize)]
pub struct UpdateVacancyStatus {
    pub status: String,
}
