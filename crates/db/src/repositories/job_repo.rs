//! Repository for the `jobs` table.

use jobboard_core::search::contains_pattern;
use jobboard_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::job::{CreateJob, Job, JobFilter, UpdateJob};
use crate::models::stats::StatusCount;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, title, company, location, job_type, category, description, \
                        requirements, salary_min, salary_max, salary_currency, is_remote, \
                        status, posted_by, deadline, created_at, updated_at";

/// WHERE clause for [`JobFilter`]; binds `$1..=$6` in field order.
/// `$1` and `$2` are [`contains_pattern`] strings.
const FILTER: &str = "($1::TEXT IS NULL \
                         OR title ILIKE $1 \
                         OR company ILIKE $1 \
                         OR description ILIKE $1) \
                      AND ($2::TEXT IS NULL OR location ILIKE $2) \
                      AND ($3::TEXT IS NULL OR job_type = $3) \
                      AND ($4::TEXT IS NULL OR category = $4) \
                      AND ($5::BOOLEAN IS NULL OR is_remote = $5) \
                      AND ($6::TEXT IS NULL OR status = $6)";

/// Provides CRUD and search operations for job postings.
pub struct JobRepo;

impl JobRepo {
    /// Insert a new job posting.
    ///
    /// `job_type`, `salary_currency`, `is_remote` and `status` fall back to
    /// the column defaults when not supplied.
    pub async fn create(
        pool: &PgPool,
        posted_by: Option<DbId>,
        input: &CreateJob,
    ) -> Result<Job, sqlx::Error> {
        let query = format!(
            "INSERT INTO jobs (title, company, location, job_type, category, description,
                               requirements, salary_min, salary_max, salary_currency,
                               is_remote, status, posted_by, deadline)
             VALUES ($1, $2, $3, COALESCE($4, 'full_time'), $5, $6, $7, $8, $9,
                     COALESCE($10, 'USD'), COALESCE($11, false), COALESCE($12, 'published'),
                     $13, $14)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(&input.title)
            .bind(&input.company)
            .bind(&input.location)
            .bind(&input.job_type)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.requirements)
            .bind(input.salary_min)
            .bind(input.salary_max)
            .bind(&input.salary_currency)
            .bind(input.is_remote)
            .bind(&input.status)
            .bind(posted_by)
            .bind(input.deadline)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs WHERE id = $1");
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Search jobs, newest first.
    pub async fn search(
        pool: &PgPool,
        filter: &JobFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Job>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM jobs WHERE {FILTER}
             ORDER BY created_at DESC, id DESC
             LIMIT $7 OFFSET $8"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(filter.q.as_deref().map(contains_pattern))
            .bind(filter.location.as_deref().map(contains_pattern))
            .bind(&filter.job_type)
            .bind(&filter.category)
            .bind(filter.is_remote)
            .bind(&filter.status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count jobs matching the same filter as [`JobRepo::search`].
    pub async fn count(pool: &PgPool, filter: &JobFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM jobs WHERE {FILTER}");
        sqlx::query_scalar(&query)
            .bind(filter.q.as_deref().map(contains_pattern))
            .bind(filter.location.as_deref().map(contains_pattern))
            .bind(&filter.job_type)
            .bind(&filter.category)
            .bind(filter.is_remote)
            .bind(&filter.status)
            .fetch_one(pool)
            .await
    }

    /// Update a job. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJob,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!(
            "UPDATE jobs SET
                title = COALESCE($2, title),
                company = COALESCE($3, company),
                location = COALESCE($4, location),
                job_type = COALESCE($5, job_type),
                category = COALESCE($6, category),
                description = COALESCE($7, description),
                requirements = COALESCE($8, requirements),
                salary_min = COALESCE($9, salary_min),
                salary_max = COALESCE($10, salary_max),
                salary_currency = COALESCE($11, salary_currency),
                is_remote = COALESCE($12, is_remote),
                status = COALESCE($13, status),
                deadline = COALESCE($14, deadline)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.company)
            .bind(&input.location)
            .bind(&input.job_type)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.requirements)
            .bind(input.salary_min)
            .bind(input.salary_max)
            .bind(&input.salary_currency)
            .bind(input.is_remote)
            .bind(&input.status)
            .bind(input.deadline)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a job (applications cascade). Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Jobs in `status` changed after `since`, oldest change first.
    pub async fn list_updated_since(
        pool: &PgPool,
        status: &str,
        since: Timestamp,
        limit: i64,
    ) -> Result<Vec<Job>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM jobs
             WHERE status = $1 AND updated_at > $2
             ORDER BY updated_at ASC, id ASC
             LIMIT $3"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(status)
            .bind(since)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn count_by_status(pool: &PgPool) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM jobs GROUP BY status ORDER BY status",
        )
        .fetch_all(pool)
        .await
    }
}
