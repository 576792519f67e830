//! Handlers for employer-submitted vacancies.
//!
//! A vacancy is reviewed by an admin and can be published once, which creates
//! a live job posting linked back to the vacancy.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use jobboard_core::error::CoreError;
use jobboard_core::status::{validate_job_type, validate_vacancy_status, JOB_TYPE_FULL_TIME};
use jobboard_core::types::DbId;
use jobboard_core::validation::{
    validate_positive_count, validate_text, MAX_LONG_TEXT_LEN, MAX_SHORT_TEXT_LEN,
};
use jobboard_db::models::job::Job;
use jobboard_db::models::vacancy::{CreateVacancy, UpdateVacancyStatus, Vacancy};
use jobboard_db::repositories::vacancy_repo::PublishOutcome;
use jobboard_db::repositories::VacancyRepo;
use jobboard_events::bus::EVENT_VACANCY_SUBMITTED;
use jobboard_events::DomainEvent;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{not_found, AppResult};
use crate::handlers::jobs::publish_job_event;
use crate::middleware::rbac::RequireAdmin;
use crate::notifications::dispatch::{message, notify_admins, KIND_VACANCY_SUBMITTED};
use crate::query::StatusFilterParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct VacancyRequest {
    pub company_name: String,
    #[validate(email)]
    pub contact_email: String,
    pub title: String,
    pub location: String,
    /// Defaults to `full_time`.
    pub job_type: Option<String>,
    pub description: String,
    /// Defaults to 1.
    pub openings: Option<i32>,
}

/// Result of publishing a vacancy.
#[derive(Debug, Serialize)]
pub struct PublishedVacancy {
    pub vacancy: Vacancy,
    pub job: Job,
}

/// POST /api/vacancies
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<VacancyRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Vacancy>>)> {
    input.validate()?;
    validate_text("company_name", &input.company_name, MAX_SHORT_TEXT_LEN)?;
    validate_text("title", &input.title, MAX_SHORT_TEXT_LEN)?;
    validate_text("location", &input.location, MAX_SHORT_TEXT_LEN)?;
    validate_text("description", &input.description, MAX_LONG_TEXT_LEN)?;
    let job_type = input.job_type.unwrap_or_else(|| JOB_TYPE_FULL_TIME.to_string());
    validate_job_type(&job_type)?;
    let openings = input.openings.unwrap_or(1);
    validate_positive_count("openings", openings)?;

    let vacancy = VacancyRepo::create(
        &state.pool,
        &CreateVacancy {
            company_name: input.company_name.trim().to_string(),
            contact_email: input.contact_email,
            title: input.title.trim().to_string(),
            location: input.location.trim().to_string(),
            job_type,
            description: input.description,
            openings,
        },
    )
    .await?;
    tracing::info!(vacancy_id = vacancy.id, company = %vacancy.company_name, "Vacancy submitted");

    notify_admins(
        &state.pool,
        &message(
            KIND_VACANCY_SUBMITTED,
            "New vacancy submitted",
            format!(
                "{} posted {} ({} opening(s))",
                vacancy.company_name, vacancy.title, vacancy.openings
            ),
            Some(format!("/admin/vacancies/{}", vacancy.id)),
        ),
    )
    .await;

    state.event_bus.publish(
        DomainEvent::new(EVENT_VACANCY_SUBMITTED)
            .with_source("vacancy", vacancy.id)
            .with_payload(serde_json::json!({
                "company_name": vacancy.company_name,
                "title": vacancy.title,
                "contact_email": vacancy.contact_email,
            })),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: vacancy })))
}

/// GET /api/admin/vacancies
pub async fn admin_list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<StatusFilterParams>,
) -> AppResult<Json<PageResponse<Vacancy>>> {
    if let Some(status) = &params.status {
        validate_vacancy_status(status)?;
    }
    let (limit, offset) = params.page();
    let status = params.status.as_deref();
    let data = VacancyRepo::list(&state.pool, status, limit, offset).await?;
    let total = VacancyRepo::count(&state.pool, status).await?;
    Ok(Json(PageResponse { data, total }))
}

/// GET /api/admin/vacancies/{id}
pub async fn admin_get(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vacancy>>> {
    let vacancy = VacancyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Vacancy", id))?;
    Ok(Json(DataResponse { data: vacancy }))
}

/// PUT /api/admin/vacancies/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVacancyStatus>,
) -> AppResult<Json<DataResponse<Vacancy>>> {
    validate_vacancy_status(&input.status)?;
    let vacancy = VacancyRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or_else(|| not_found("Vacancy", id))?;
    tracing::info!(
        vacancy_id = id,
        admin_id = admin.subject_id,
        status = %vacancy.status,
        "Vacancy status updated"
    );
    Ok(Json(DataResponse { data: vacancy }))
}

/// POST /api/admin/vacancies/{id}/publish
///
/// Creates a published job from the vacancy and marks it approved. A vacancy
/// that already has a job is a conflict.
pub async fn publish(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<DataResponse<PublishedVacancy>>)> {
    match VacancyRepo::publish(&state.pool, id, Some(admin.subject_id)).await? {
        PublishOutcome::NotFound => Err(not_found("Vacancy", id)),
        PublishOutcome::AlreadyPublished(vacancy) => Err(CoreError::Conflict(format!(
            "Vacancy {id} is already published as job {}",
            vacancy.job_id.unwrap_or_default()
        ))
        .into()),
        PublishOutcome::Published { vacancy, job } => {
            tracing::info!(
                vacancy_id = id,
                job_id = job.id,
                admin_id = admin.subject_id,
                "Vacancy published"
            );
            publish_job_event(&state, &job, admin.subject_id);
            Ok((
                StatusCode::CREATED,
                Json(DataResponse {
                    data: PublishedVacancy { vacancy, job },
                }),
            ))
        }
    }
}

/// DELETE /api/admin/vacancies/{id}
pub async fn admin_delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !VacancyRepo::delete(&state.pool, id).await? {
        return Err(not_found("Vacancy", id));
    }
    tracing::info!(vacancy_id = id, admin_id = admin.subject_id, "Vacancy deleted");
    Ok(StatusCode::NO_CONTENT)
}
