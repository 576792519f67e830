//! Repository for the `staffing_inquiries` table.

use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::inquiry::{CreateInquiry, StaffingInquiry, UpdateInquiry};
use crate::models::stats::StatusCount;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, company_name, contact_name, email, phone, positions_needed, message, \
                        status, admin_notes, created_at, updated_at";

/// Provides CRUD operations for staffing inquiries.
pub struct InquiryRepo;

impl InquiryRepo {
    /// Insert a new inquiry in `new` status.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInquiry,
    ) -> Result<StaffingInquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO staffing_inquiries (company_name, contact_name, email, phone,
                                             positions_needed, message)
             VALUES ($1, $2, LOWER($3), $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StaffingInquiry>(&query)
            .bind(&input.company_name)
            .bind(&input.contact_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.positions_needed)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StaffingInquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staffing_inquiries WHERE id = $1");
        sqlx::query_as::<_, StaffingInquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List inquiries, newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<StaffingInquiry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM staffing_inquiries
             WHERE $1::TEXT IS NULL OR status = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, StaffingInquiry>(&query)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, status: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM staffing_inquiries WHERE $1::TEXT IS NULL OR status = $1",
        )
        .bind(status)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInquiry,
    ) -> Result<Option<StaffingInquiry>, sqlx::Error> {
        let query = format!(
            "UPDATE staffing_inquiries SET
                status = COALESCE($2, status),
                admin_notes = COALESCE($3, admin_notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StaffingInquiry>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(&input.admin_notes)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM staffing_inquiries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count_by_status(pool: &PgPool) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM staffing_inquiries
             GROUP BY status ORDER BY status",
        )
        .fetch_all(pool)
        .await
    }
}
