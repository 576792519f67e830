//! Repository for the `applications` table.

use jobboard_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::application::{
    Application, ApplicationDetail, ApplicationFilter, CreateApplication,
};
use crate::models::stats::StatusCount;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, job_id, user_id, cover_letter, resume_path, status, admin_notes, \
                        created_at, updated_at";

/// SELECT list + joins producing [`ApplicationDetail`] rows.
const DETAIL_SELECT: &str = "SELECT a.id, a.job_id, j.title AS job_title, j.company, \
                                    a.user_id, u.full_name AS applicant_name, \
                                    u.email AS applicant_email, a.cover_letter, \
                                    a.resume_path, a.status, a.admin_notes, \
                                    a.created_at, a.updated_at \
                             FROM applications a \
                             JOIN jobs j ON j.id = a.job_id \
                             JOIN users u ON u.id = a.user_id";

/// WHERE clause for [`ApplicationFilter`]; binds `$1..=$3`.
const FILTER: &str = "($1::BIGINT IS NULL OR a.job_id = $1) \
                      AND ($2::BIGINT IS NULL OR a.user_id = $2) \
                      AND ($3::TEXT IS NULL OR a.status = $3)";

/// Provides CRUD operations for job applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert a new application in `pending` status.
    ///
    /// A second application by the same user for the same job violates
    /// `uq_applications_job_user`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateApplication,
    ) -> Result<Application, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications (job_id, user_id, cover_letter, resume_path)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(input.job_id)
            .bind(input.user_id)
            .bind(&input.cover_letter)
            .bind(&input.resume_path)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE id = $1");
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Detail view of a single application.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ApplicationDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE a.id = $1");
        sqlx::query_as::<_, ApplicationDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_job_and_user(
        pool: &PgPool,
        job_id: DbId,
        user_id: DbId,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM applications WHERE job_id = $1 AND user_id = $2");
        sqlx::query_as::<_, Application>(&query)
            .bind(job_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List applications with job and applicant details, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &ApplicationFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ApplicationDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT} WHERE {FILTER}
             ORDER BY a.created_at DESC, a.id DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, ApplicationDetail>(&query)
            .bind(filter.job_id)
            .bind(filter.user_id)
            .bind(&filter.status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count applications matching the same filter as [`ApplicationRepo::list`].
    pub async fn count(pool: &PgPool, filter: &ApplicationFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM applications a WHERE {FILTER}");
        sqlx::query_scalar(&query)
            .bind(filter.job_id)
            .bind(filter.user_id)
            .bind(&filter.status)
            .fetch_one(pool)
            .await
    }

    /// Set the status (and optionally the admin notes) of an application.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
        admin_notes: Option<&str>,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!(
            "UPDATE applications SET
                status = $2,
                admin_notes = COALESCE($3, admin_notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(status)
            .bind(admin_notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an application owned by `user_id` while it is still `pending`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete_pending_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM applications WHERE id = $1 AND user_id = $2 AND status = 'pending'",
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Applications changed after `since`, oldest change first. When
    /// `user_id` is set only that applicant's rows are returned.
    pub async fn list_updated_since(
        pool: &PgPool,
        user_id: Option<DbId>,
        since: Timestamp,
        limit: i64,
    ) -> Result<Vec<ApplicationDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE a.updated_at > $1 AND ($2::BIGINT IS NULL OR a.user_id = $2)
             ORDER BY a.updated_at ASC, a.id ASC
             LIMIT $3"
        );
        sqlx::query_as::<_, ApplicationDetail>(&query)
            .bind(since)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn count_by_status(pool: &PgPool) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM applications GROUP BY status ORDER BY status",
        )
        .fetch_all(pool)
        .await
    }
}
