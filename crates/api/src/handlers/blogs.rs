//! Handlers for blog posts (CMS).
//!
//! Public readers see published posts only and look them up by slug; admins
//! manage every post by id.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use jobboard_core::slug::{slugify, with_suffix};
use jobboard_core::types::DbId;
use jobboard_core::validation::{validate_text, MAX_LONG_TEXT_LEN, MAX_SHORT_TEXT_LEN};
use jobboard_db::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};
use jobboard_db::repositories::BlogPostRepo;
use jobboard_db::DbPool;

use crate::error::{not_found, AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// Find a free slug for `base`, appending `-2`, `-3`, ... while taken.
/// `exclude_id` lets a post keep its own slug on update.
async fn resolve_unique_slug(
    pool: &DbPool,
    base: &str,
    exclude_id: Option<DbId>,
) -> Result<String, sqlx::Error> {
    let mut candidate = base.to_string();
    let mut n = 2;
    while BlogPostRepo::slug_exists(pool, &candidate, exclude_id).await? {
        candidate = with_suffix(base, n);
        n += 1;
    }
    Ok(candidate)
}

fn validate_tags(tags: &[String]) -> Result<(), jobboard_core::error::CoreError> {
    for tag in tags {
        validate_text("tags", tag, MAX_SHORT_TEXT_LEN)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/blogs
pub async fn list_published(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<PageResponse<BlogPost>>> {
    let (limit, offset) = params.resolve();
    let data = BlogPostRepo::list(&state.pool, true, limit, offset).await?;
    let total = BlogPostRepo::count(&state.pool, true).await?;
    Ok(Json(PageResponse { data, total }))
}

/// GET /api/blogs/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<BlogPost>>> {
    let post = BlogPostRepo::find_by_slug(&state.pool, &slug, true)
        .await?
        .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;
    Ok(Json(DataResponse { data: post }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/admin/blogs
pub async fn admin_list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<PageResponse<BlogPost>>> {
    let (limit, offset) = params.resolve();
    let data = BlogPostRepo::list(&state.pool, false, limit, offset).await?;
    let total = BlogPostRepo::count(&state.pool, false).await?;
    Ok(Json(PageResponse { data, total }))
}

/// GET /api/admin/blogs/{id}
pub async fn admin_get(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<BlogPost>>> {
    let post = BlogPostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("BlogPost", id))?;
    Ok(Json(DataResponse { data: post }))
}

/// POST /api/admin/blogs
///
/// The slug comes from `slug` when given, otherwise from the title.
pub async fn create_post(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<(StatusCode, Json<DataResponse<BlogPost>>)> {
    validate_text("title", &input.title, MAX_SHORT_TEXT_LEN)?;
    validate_text("content", &input.content, MAX_LONG_TEXT_LEN)?;
    if let Some(tags) = &input.tags {
        validate_tags(tags)?;
    }

    let base = slugify(input.slug.as_deref().unwrap_or(&input.title));
    let slug = resolve_unique_slug(&state.pool, &base, None).await?;

    let post = BlogPostRepo::create(&state.pool, Some(admin.subject_id), &slug, &input).await?;
    tracing::info!(
        post_id = post.id,
        slug = %post.slug,
        published = post.is_published,
        "Blog post created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// PUT /api/admin/blogs/{id}
///
/// The slug only changes when one is supplied; the title alone never
/// re-slugs a post.
pub async fn update_post(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlogPost>,
) -> AppResult<Json<DataResponse<BlogPost>>> {
    if let Some(title) = &input.title {
        validate_text("title", title, MAX_SHORT_TEXT_LEN)?;
    }
    if let Some(content) = &input.content {
        validate_text("content", content, MAX_LONG_TEXT_LEN)?;
    }
    if let Some(tags) = &input.tags {
        validate_tags(tags)?;
    }

    if BlogPostRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found("BlogPost", id));
    }

    let slug = match &input.slug {
        Some(requested) => {
            Some(resolve_unique_slug(&state.pool, &slugify(requested), Some(id)).await?)
        }
        None => None,
    };

    let post = BlogPostRepo::update(&state.pool, id, slug.as_deref(), &input)
        .await?
        .ok_or_else(|| not_found("BlogPost", id))?;
    tracing::info!(post_id = id, admin_id = admin.subject_id, "Blog post updated");

    Ok(Json(DataResponse { data: post }))
}

/// DELETE /api/admin/blogs/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !BlogPostRepo::delete(&state.pool, id).await? {
        return Err(not_found("BlogPost", id));
    }
    tracing::info!(post_id = id, admin_id = admin.subject_id, "Blog post deleted");
    Ok(StatusCode::NO_CONTENT)
}
