//! Repository for the `testimonials` table.

use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, author_name, author_title, company, content, rating, is_approved, \
                        created_at, updated_at";

/// Provides CRUD operations for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a testimonial. Admin-created testimonials may be pre-approved;
    /// public submissions always pass `is_approved = false`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
        is_approved: bool,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (author_name, author_title, company, content, rating,
                                       is_approved)
             VALUES ($1, $2, $3, $4, COALESCE($5, 5), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.author_name)
            .bind(&input.author_title)
            .bind(&input.company)
            .bind(&input.content)
            .bind(input.rating)
            .bind(is_approved)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List testimonials, newest first. With `approved_only`, pending ones are hidden.
    pub async fn list(
        pool: &PgPool,
        approved_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials
             WHERE NOT $1 OR is_approved
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(approved_only)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET
                author_name = COALESCE($2, author_name),
                author_title = COALESCE($3, author_title),
                company = COALESCE($4, company),
                content = COALESCE($5, content),
                rating = COALESCE($6, rating),
                is_approved = COALESCE($7, is_approved)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&input.author_name)
            .bind(&input.author_title)
            .bind(&input.company)
            .bind(&input.content)
            .bind(input.rating)
            .bind(input.is_approved)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
