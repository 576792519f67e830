//! Repository for the `vacancies` table.

use jobboard_core::status::{JOB_STATUS_PUBLISHED, VACANCY_STATUS_APPROVED};
use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::job::Job;
use crate::models::vacancy::{CreateVacancy, Vacancy};
use crate::repositories::job_repo::COLUMNS as JOB_COLUMNS;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, company_name, contact_email, title, location, job_type, description, \
                        openings, status, job_id, created_at, updated_at";

/// Result of [`VacancyRepo::publish`].
#[derive(Debug)]
pub enum PublishOutcome {
    NotFound,
    /// The vacancy already has a linked job posting.
    AlreadyPublished(Vacancy),
    Published { vacancy: Vacancy, job: Job },
}

/// Provides CRUD operations for employer-submitted vacancies.
pub struct VacancyRepo;

impl VacancyRepo {
    /// Insert a new vacancy in `pending` status.
    pub async fn create(pool: &PgPool, input: &CreateVacancy) -> Result<Vacancy, sqlx::Error> {
        let query = format!(
            "INSERT INTO vacancies (company_name, contact_email, title, location, job_type,
                                    description, openings)
             VALUES ($1, LOWER($2), $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vacancy>(&query)
            .bind(&input.company_name)
            .bind(&input.contact_email)
            .bind(&input.title)
            .bind(&input.location)
            .bind(&input.job_type)
            .bind(&input.description)
            .bind(input.openings)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vacancy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vacancies WHERE id = $1");
        sqlx::query_as::<_, Vacancy>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List vacancies, newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Vacancy>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vacancies
             WHERE $1::TEXT IS NULL OR status = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Vacancy>(&query)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, status: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM vacancies WHERE $1::TEXT IS NULL OR status = $1")
            .bind(status)
            .fetch_one(pool)
            .await
    }

    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Vacancy>, sqlx::Error> {
        let query = format!("UPDATE vacancies SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Vacancy>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Turn a vacancy into a published job posting.
    ///
    /// Runs in one transaction: the vacancy row is locked, a job is created
    /// from its fields, and the vacancy is marked approved and linked to it.
    pub async fn publish(
        pool: &PgPool,
        id: DbId,
        posted_by: Option<DbId>,
    ) -> Result<PublishOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM vacancies WHERE id = $1 FOR UPDATE");
        let Some(vacancy) = sqlx::query_as::<_, Vacancy>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(PublishOutcome::NotFound);
        };
        if vacancy.job_id.is_some() {
            return Ok(PublishOutcome::AlreadyPublished(vacancy));
        }

        let insert = format!(
            "INSERT INTO jobs (title, company, location, job_type, description, status, posted_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {JOB_COLUMNS}"
        );
        let job = sqlx::query_as::<_, Job>(&insert)
            .bind(&vacancy.title)
            .bind(&vacancy.company_name)
            .bind(&vacancy.location)
            .bind(&vacancy.job_type)
            .bind(&vacancy.description)
            .bind(JOB_STATUS_PUBLISHED)
            .bind(posted_by)
            .fetch_one(&mut *tx)
            .await?;

        let link = format!(
            "UPDATE vacancies SET status = $2, job_id = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let vacancy = sqlx::query_as::<_, Vacancy>(&link)
            .bind(id)
            .bind(VACANCY_STATUS_APPROVED)
            .bind(job.id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(PublishOutcome::Published { vacancy, job })
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vacancies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
