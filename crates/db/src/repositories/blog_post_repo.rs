//! Repository for the `blog_posts` table.

use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, author_id, title, slug, excerpt, content, cover_image_path, tags, \
                        is_published, published_at, created_at, updated_at";

/// Provides CRUD operations for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Insert a new post under an already-resolved unique `slug`.
    ///
    /// `published_at` is stamped when the post is created published.
    pub async fn create(
        pool: &PgPool,
        author_id: Option<DbId>,
        slug: &str,
        input: &CreateBlogPost,
    ) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts (author_id, title, slug, excerpt, content,
                                     cover_image_path, tags, is_published, published_at)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, '{{}}'::TEXT[]), COALESCE($8, false),
                     CASE WHEN COALESCE($8, false) THEN NOW() END)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(author_id)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.cover_image_path)
            .bind(&input.tags)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE id = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a post by slug. With `published_only`, drafts are treated as absent.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
        published_only: bool,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts
             WHERE slug = $1 AND (NOT $2 OR is_published)"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .bind(published_only)
            .fetch_optional(pool)
            .await
    }

    /// Whether `slug` is taken by any post other than `exclude_id`.
    pub async fn slug_exists(
        pool: &PgPool,
        slug: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM blog_posts
                WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// List posts. Published listings are ordered by `published_at`, admin
    /// listings by creation time; both newest first.
    pub async fn list(
        pool: &PgPool,
        published_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts
             WHERE NOT $1 OR is_published
             ORDER BY COALESCE(published_at, created_at) DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(published_only)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, published_only: bool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM blog_posts WHERE NOT $1 OR is_published")
            .bind(published_only)
            .fetch_one(pool)
            .await
    }

    /// Patch a post. `slug` must already be resolved to a unique value when set.
    ///
    /// `published_at` is stamped the first time the post becomes published and
    /// kept afterwards, even if the post is unpublished again.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        slug: Option<&str>,
        input: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                excerpt = COALESCE($4, excerpt),
                content = COALESCE($5, content),
                cover_image_path = COALESCE($6, cover_image_path),
                tags = COALESCE($7, tags),
                is_published = COALESCE($8, is_published),
                published_at = CASE
                    WHEN published_at IS NULL AND COALESCE($8, is_published) THEN NOW()
                    ELSE published_at
                END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.cover_image_path)
            .bind(&input.tags)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
