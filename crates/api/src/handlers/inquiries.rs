//! Handlers for staffing inquiries (the employer contact form).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use jobboard_core::status::validate_inquiry_status;
use jobboard_core::types::DbId;
use jobboard_core::validation::{
    validate_positive_count, validate_text, MAX_LONG_TEXT_LEN, MAX_SHORT_TEXT_LEN,
};
use jobboard_db::models::inquiry::{CreateInquiry, StaffingInquiry, UpdateInquiry};
use jobboard_db::repositories::InquiryRepo;
use jobboard_events::bus::EVENT_INQUIRY_CREATED;
use jobboard_events::DomainEvent;
use serde::Deserialize;
use validator::Validate;

use crate::error::{not_found, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::notifications::dispatch::{message, notify_admins, KIND_INQUIRY_CREATED};
use crate::query::StatusFilterParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct InquiryRequest {
    pub company_name: String,
    pub contact_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    /// Defaults to 1.
    pub positions_needed: Option<i32>,
    pub message: Option<String>,
}

/// POST /api/inquiries
///
/// Public. New inquiries start in status `new` and every active admin is
/// notified.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<InquiryRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<StaffingInquiry>>)> {
    input.validate()?;
    validate_text("company_name", &input.company_name, MAX_SHORT_TEXT_LEN)?;
    validate_text("contact_name", &input.contact_name, MAX_SHORT_TEXT_LEN)?;
    if let Some(body) = &input.message {
        validate_text("message", body, MAX_LONG_TEXT_LEN)?;
    }
    let positions_needed = input.positions_needed.unwrap_or(1);
    validate_positive_count("positions_needed", positions_needed)?;

    let inquiry = InquiryRepo::create(
        &state.pool,
        &CreateInquiry {
            company_name: input.company_name.trim().to_string(),
            contact_name: input.contact_name.trim().to_string(),
            email: input.email,
            phone: input.phone,
            positions_needed,
            message: input.message,
        },
    )
    .await?;
    tracing::info!(
        inquiry_id = inquiry.id,
        company = %inquiry.company_name,
        "Staffing inquiry received"
    );

    notify_admins(
        &state.pool,
        &message(
            KIND_INQUIRY_CREATED,
            "New staffing inquiry",
            format!(
                "{} needs {} position(s)",
                inquiry.company_name, inquiry.positions_needed
            ),
            Some(format!("/admin/inquiries/{}", inquiry.id)),
        ),
    )
    .await;

    state.event_bus.publish(
        DomainEvent::new(EVENT_INQUIRY_CREATED)
            .with_source("inquiry", inquiry.id)
            .with_payload(serde_json::json!({
                "company_name": inquiry.company_name,
                "contact_name": inquiry.contact_name,
                "email": inquiry.email,
            })),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: inquiry })))
}

/// GET /api/admin/inquiries
pub async fn admin_list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<StatusFilterParams>,
) -> AppResult<Json<PageResponse<StaffingInquiry>>> {
    if let Some(status) = &params.status {
        validate_inquiry_status(status)?;
    }
    let (limit, offset) = params.page();
    let status = params.status.as_deref();
    let data = InquiryRepo::list(&state.pool, status, limit, offset).await?;
    let total = InquiryRepo::count(&state.pool, status).await?;
    Ok(Json(PageResponse { data, total }))
}

/// GET /api/admin/inquiries/{id}
pub async fn admin_get(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<StaffingInquiry>>> {
    let inquiry = InquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("StaffingInquiry", id))?;
    Ok(Json(DataResponse { data: inquiry }))
}

/// PUT /api/admin/inquiries/{id}
pub async fn admin_update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInquiry>,
) -> AppResult<Json<DataResponse<StaffingInquiry>>> {
    if let Some(status) = &input.status {
        validate_inquiry_status(status)?;
    }
    if let Some(notes) = &input.admin_notes {
        validate_text("admin_notes", notes, MAX_LONG_TEXT_LEN)?;
    }

    let inquiry = InquiryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("StaffingInquiry", id))?;
    tracing::info!(
        inquiry_id = id,
        admin_id = admin.subject_id,
        status = %inquiry.status,
        "Inquiry updated"
    );
    Ok(Json(DataResponse { data: inquiry }))
}

/// DELETE /api/admin/inquiries/{id}
pub async fn admin_delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !InquiryRepo::delete(&state.pool, id).await? {
        return Err(not_found("StaffingInquiry", id));
    }
    tracing::info!(inquiry_id = id, admin_id = admin.subject_id, "Inquiry deleted");
    Ok(StatusCode::NO_CONTENT)
}
