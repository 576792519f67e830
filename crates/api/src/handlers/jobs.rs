//! Handlers for job postings: public search and admin management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use jobboard_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use jobboard_core::status::{validate_job_status, validate_job_type, JOB_STATUS_PUBLISHED};
use jobboard_core::types::DbId;
use jobboard_core::validation::{
    validate_salary_range, validate_text, MAX_LONG_TEXT_LEN, MAX_SHORT_TEXT_LEN,
};
use jobboard_db::models::job::{CreateJob, Job, JobFilter, UpdateJob};
use jobboard_db::repositories::JobRepo;
use jobboard_events::bus::EVENT_JOB_PUBLISHED;
use jobboard_events::DomainEvent;
use serde::Deserialize;

use crate::error::{not_found, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct JobSearchParams {
    pub q: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub category: Option<String>,
    pub is_remote: Option<bool>,
    /// Only honoured on the admin listing.
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl JobSearchParams {
    fn into_filter(self, status: Option<String>) -> (JobFilter, i64, i64) {
        let non_blank = |v: Option<String>| {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };
        let filter = JobFilter {
            q: non_blank(self.q),
            location: non_blank(self.location),
            job_type: non_blank(self.job_type),
            category: non_blank(self.category),
            is_remote: self.is_remote,
            status,
        };
        (
            filter,
            clamp_limit(self.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE),
            clamp_offset(self.offset),
        )
    }
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/jobs
///
/// Search published jobs, newest first.
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobSearchParams>,
) -> AppResult<Json<PageResponse<Job>>> {
    let (filter, limit, offset) = params.into_filter(Some(JOB_STATUS_PUBLISHED.to_string()));
    let jobs = JobRepo::search(&state.pool, &filter, limit, offset).await?;
    let total = JobRepo::count(&state.pool, &filter).await?;
    tracing::debug!(count = jobs.len(), total, "Listed published jobs");
    Ok(Json(PageResponse { data: jobs, total }))
}

/// GET /api/jobs/{id}
///
/// Drafts and closed postings are reported as not found.
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Job>>> {
    let job = JobRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|j| j.status == JOB_STATUS_PUBLISHED)
        .ok_or_else(|| not_found("Job", id))?;
    Ok(Json(DataResponse { data: job }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/admin/jobs
pub async fn admin_list_jobs(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<JobSearchParams>,
) -> AppResult<Json<PageResponse<Job>>> {
    if let Some(status) = &params.status {
        validate_job_status(status)?;
    }
    let status = params.status.clone();
    let (filter, limit, offset) = params.into_filter(status);
    let jobs = JobRepo::search(&state.pool, &filter, limit, offset).await?;
    let total = JobRepo::count(&state.pool, &filter).await?;
    Ok(Json(PageResponse { data: jobs, total }))
}

/// GET /api/admin/jobs/{id}
pub async fn admin_get_job(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Job>>> {
    let job = JobRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Job", id))?;
    Ok(Json(DataResponse { data: job }))
}

/// POST /api/admin/jobs
///
/// New jobs default to `published`; `posted_by` is the calling admin.
pub async fn create_job(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateJob>,
) -> AppResult<(StatusCode, Json<DataResponse<Job>>)> {
    validate_text("title", &input.title, MAX_SHORT_TEXT_LEN)?;
    validate_text("company", &input.company, MAX_SHORT_TEXT_LEN)?;
    validate_text("location", &input.location, MAX_SHORT_TEXT_LEN)?;
    validate_text("description", &input.description, MAX_LONG_TEXT_LEN)?;
    if let Some(job_type) = &input.job_type {
        validate_job_type(job_type)?;
    }
    if let Some(status) = &input.status {
        validate_job_status(status)?;
    }
    validate_salary_range(input.salary_min, input.salary_max)?;

    let job = JobRepo::create(&state.pool, Some(admin.subject_id), &input).await?;
    tracing::info!(
        job_id = job.id,
        admin_id = admin.subject_id,
        status = %job.status,
        "Job created"
    );

    if job.status == JOB_STATUS_PUBLISHED {
        publish_job_event(&state, &job, admin.subject_id);
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: job })))
}

/// PUT /api/admin/jobs/{id}
pub async fn update_job(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateJob>,
) -> AppResult<Json<DataResponse<Job>>> {
    let existing = JobRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Job", id))?;

    for (field, value, max) in [
        ("title", &input.title, MAX_SHORT_TEXT_LEN),
        ("company", &input.company, MAX_SHORT_TEXT_LEN),
        ("location", &input.location, MAX_SHORT_TEXT_LEN),
        ("description", &input.description, MAX_LONG_TEXT_LEN),
    ] {
        if let Some(value) = value {
            validate_text(field, value, max)?;
        }
    }
    if let Some(job_type) = &input.job_type {
        validate_job_type(job_type)?;
    }
    if let Some(status) = &input.status {
        validate_job_status(status)?;
    }
    validate_salary_range(
        input.salary_min.or(existing.salary_min),
        input.salary_max.or(existing.salary_max),
    )?;

    let job = JobRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Job", id))?;
    tracing::info!(job_id = id, admin_id = admin.subject_id, "Job updated");

    if existing.status != JOB_STATUS_PUBLISHED && job.status == JOB_STATUS_PUBLISHED {
        publish_job_event(&state, &job, admin.subject_id);
    }

    Ok(Json(DataResponse { data: job }))
}

/// DELETE /api/admin/jobs/{id}
///
/// Applications for the job are removed with it.
pub async fn delete_job(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !JobRepo::delete(&state.pool, id).await? {
        return Err(not_found("Job", id));
    }
    tracing::info!(job_id = id, admin_id = admin.subject_id, "Job deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) fn publish_job_event(state: &AppState, job: &Job, actor_id: DbId) {
    state.event_bus.publish(
        DomainEvent::new(EVENT_JOB_PUBLISHED)
            .with_source("job", job.id)
            .with_actor(actor_id)
            .with_payload(serde_json::json!({
                "title": job.title,
                "company": job.company,
                "location": job.location,
            })),
    );
}
