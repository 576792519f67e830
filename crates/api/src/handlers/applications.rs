//! Handlers for job applications.
//!
//! Job seekers apply, list and withdraw their own applications; admins review
//! them and move them through the status vocabulary.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use jobboard_core::error::CoreError;
use jobboard_core::status::{validate_application_status, JOB_STATUS_PUBLISHED};
use jobboard_core::types::DbId;
use jobboard_core::validation::{validate_text, MAX_LONG_TEXT_LEN};
use jobboard_db::models::application::{
    Application, ApplicationDetail, ApplicationFilter, CreateApplication, UpdateApplicationStatus,
};
use jobboard_db::repositories::{ApplicationRepo, JobRepo, UserRepo};
use jobboard_events::bus::{EVENT_APPLICATION_STATUS_CHANGED, EVENT_APPLICATION_SUBMITTED};
use jobboard_events::DomainEvent;
use serde::Deserialize;

use crate::error::{not_found, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireUser};
use crate::notifications::dispatch::{
    message, notify_admins, notify_user, KIND_APPLICATION_STATUS, KIND_APPLICATION_SUBMITTED,
};
use crate::query::PaginationParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ApplyRequest {
    pub cover_letter: Option<String>,
    /// Defaults to the resume stored on the applicant's profile.
    pub resume_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApplicationListParams {
    pub job_id: Option<DbId>,
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Job seeker
// ---------------------------------------------------------------------------

/// POST /api/jobs/{id}/apply
///
/// Only published jobs accept applications. Every active admin is notified.
pub async fn apply(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(job_id): Path<DbId>,
    Json(input): Json<ApplyRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Application>>)> {
    let job = JobRepo::find_by_id(&state.pool, job_id)
        .await?
        .ok_or_else(|| not_found("Job", job_id))?;
    if job.status != JOB_STATUS_PUBLISHED {
        return Err(CoreError::Validation(format!(
            "Job {job_id} is not accepting applications"
        ))
        .into());
    }

    if ApplicationRepo::find_by_job_and_user(&state.pool, job_id, user.subject_id)
        .await?
        .is_some()
    {
        return Err(CoreError::Conflict("You have already applied to this job".into()).into());
    }

    if let Some(cover_letter) = &input.cover_letter {
        validate_text("cover_letter", cover_letter, MAX_LONG_TEXT_LEN)?;
    }

    let applicant = UserRepo::find_by_id(&state.pool, user.subject_id)
        .await?
        .ok_or_else(|| not_found("User", user.subject_id))?;
    let resume_path = input
        .resume_path
        .filter(|p| !p.trim().is_empty())
        .or_else(|| applicant.resume_path.clone());

    let application = ApplicationRepo::create(
        &state.pool,
        &CreateApplication {
            job_id,
            user_id: applicant.id,
            cover_letter: input.cover_letter,
            resume_path,
        },
    )
    .await?;
    tracing::info!(
        application_id = application.id,
        job_id,
        user_id = applicant.id,
        "Application submitted",
    );

    notify_admins(
        &state.pool,
        &message(
            KIND_APPLICATION_SUBMITTED,
            "New application",
            format!("{} applied for {} at {}", applicant.full_name, job.title, job.company),
            Some(format!("/admin/applications/{}", application.id)),
        ),
    )
    .await;

    state.event_bus.publish(
        DomainEvent::new(EVENT_APPLICATION_SUBMITTED)
            .with_source("application", application.id)
            .with_actor(applicant.id)
            .with_payload(serde_json::json!({
                "job_title": job.title,
                "company": job.company,
                "applicant_name": applicant.full_name,
            })),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: application })))
}

/// GET /api/applications/mine
pub async fn list_mine(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<PageResponse<ApplicationDetail>>> {
    let (limit, offset) = params.resolve();
    let filter = ApplicationFilter {
        user_id: Some(user.subject_id),
        ..Default::default()
    };
    let data = ApplicationRepo::list(&state.pool, &filter, limit, offset).await?;
    let total = ApplicationRepo::count(&state.pool, &filter).await?;
    Ok(Json(PageResponse { data, total }))
}

/// DELETE /api/applications/{id}
///
/// Withdraws a pending application. Other users' applications are reported
/// as not found.
pub async fn withdraw(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let application = ApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|a| a.user_id == user.subject_id)
        .ok_or_else(|| not_found("Application", id))?;

    if !ApplicationRepo::delete_pending_for_user(&state.pool, id, user.subject_id).await? {
        return Err(CoreError::Conflict(format!(
            "Application is already '{}' and can no longer be withdrawn",
            application.status
        ))
        .into());
    }

    tracing::info!(application_id = id, user_id = user.subject_id, "Application withdrawn");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/admin/applications
pub async fn admin_list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<ApplicationListParams>,
) -> AppResult<Json<PageResponse<ApplicationDetail>>> {
    if let Some(status) = &params.status {
        validate_application_status(status)?;
    }
    let (limit, offset) = PaginationParams {
        limit: params.limit,
        offset: params.offset,
    }
    .resolve();
    let filter = ApplicationFilter {
        job_id: params.job_id,
        user_id: None,
        status: params.status,
    };

    let data = ApplicationRepo::list(&state.pool, &filter, limit, offset).await?;
    let total = ApplicationRepo::count(&state.pool, &filter).await?;
    tracing::debug!(count = data.len(), total, "Listed applications");
    Ok(Json(PageResponse { data, total }))
}

/// GET /api/admin/applications/{id}
pub async fn admin_get(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ApplicationDetail>>> {
    let detail = ApplicationRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Application", id))?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/admin/applications/{id}/status
///
/// The applicant receives an in-app notification of the new status.
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateApplicationStatus>,
) -> AppResult<Json<DataResponse<ApplicationDetail>>> {
    validate_application_status(&input.status)?;
    if let Some(notes) = &input.admin_notes {
        validate_text("admin_notes", notes, MAX_LONG_TEXT_LEN)?;
    }

    let previous = ApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Application", id))?;
    ApplicationRepo::update_status(&state.pool, id, &input.status, input.admin_notes.as_deref())
        .await?
        .ok_or_else(|| not_found("Application", id))?;
    let detail = ApplicationRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Application", id))?;

    tracing::info!(
        application_id = id,
        admin_id = admin.subject_id,
        from = %previous.status,
        to = %detail.status,
        "Application status updated",
    );

    notify_user(
        &state.pool,
        detail.user_id,
        &message(
            KIND_APPLICATION_STATUS,
            "Application update",
            format!(
                "Your application for {} at {} is now {}",
                detail.job_title, detail.company, detail.status
            ),
            Some("/applications".to_string()),
        ),
    )
    .await;

    state.event_bus.publish(
        DomainEvent::new(EVENT_APPLICATION_STATUS_CHANGED)
            .with_source("application", id)
            .with_actor(admin.subject_id)
            .with_payload(serde_json::json!({
                "job_title": detail.job_title,
                "company": detail.company,
                "applicant_name": detail.applicant_name,
                "old_status": previous.status,
                "new_status": detail.status,
            })),
    );

    Ok(Json(DataResponse { data: detail }))
}
