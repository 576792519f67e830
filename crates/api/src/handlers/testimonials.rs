//! Handlers for testimonials.
//!
//! Public submissions start unapproved and are hidden until an admin
//! approves them.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use jobboard_core::error::CoreError;
use jobboard_core::types::DbId;
use jobboard_core::validation::{
    validate_rating, validate_text, MAX_LONG_TEXT_LEN, MAX_SHORT_TEXT_LEN,
};
use jobboard_db::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use jobboard_db::repositories::TestimonialRepo;
use serde::Deserialize;

use crate::error::{not_found, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AdminCreateParams {
    /// Admin-authored testimonials are approved unless `approved=false`.
    pub approved: Option<bool>,
}

fn validate_create(input: &CreateTestimonial) -> Result<(), CoreError> {
    validate_text("author_name", &input.author_name, MAX_SHORT_TEXT_LEN)?;
    validate_text("content", &input.content, MAX_LONG_TEXT_LEN)?;
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }
    Ok(())
}

/// GET /api/testimonials
pub async fn list_approved(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Testimonial>>>> {
    let (limit, offset) = params.resolve();
    let data = TestimonialRepo::list(&state.pool, true, limit, offset).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/testimonials
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<DataResponse<Testimonial>>)> {
    validate_create(&input)?;
    let testimonial = TestimonialRepo::create(&state.pool, &input, false).await?;
    tracing::info!(testimonial_id = testimonial.id, "Testimonial submitted");
    Ok((StatusCode::CREATED, Json(DataResponse { data: testimonial })))
}

/// GET /api/admin/testimonials
pub async fn admin_list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Testimonial>>>> {
    let (limit, offset) = params.resolve();
    let data = TestimonialRepo::list(&state.pool, false, limit, offset).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/admin/testimonials
pub async fn admin_create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(params): Query<AdminCreateParams>,
    Json(input): Json<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<DataResponse<Testimonial>>)> {
    validate_create(&input)?;
    let approved = params.approved.unwrap_or(true);
    let testimonial = TestimonialRepo::create(&state.pool, &input, approved).await?;
    tracing::info!(
        testimonial_id = testimonial.id,
        admin_id = admin.subject_id,
        approved,
        "Testimonial created",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: testimonial })))
}

/// PUT /api/admin/testimonials/{id}
pub async fn admin_update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTestimonial>,
) -> AppResult<Json<DataResponse<Testimonial>>> {
    if let Some(name) = &input.author_name {
        validate_text("author_name", name, MAX_SHORT_TEXT_LEN)?;
    }
    if let Some(content) = &input.content {
        validate_text("content", content, MAX_LONG_TEXT_LEN)?;
    }
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }

    let testimonial = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Testimonial", id))?;
    tracing::info!(
        testimonial_id = id,
        admin_id = admin.subject_id,
        approved = testimonial.is_approved,
        "Testimonial updated",
    );
    Ok(Json(DataResponse { data: testimonial }))
}

/// DELETE /api/admin/testimonials/{id}
pub async fn admin_delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !TestimonialRepo::delete(&state.pool, id).await? {
        return Err(not_found("Testimonial", id));
    }
    tracing::info!(testimonial_id = id, admin_id = admin.subject_id, "Testimonial deleted");
    Ok(StatusCode::NO_CONTENT)
}
