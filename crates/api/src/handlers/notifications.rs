//! Handlers for the caller's in-app notifications.
//!
//! Users and admins share these endpoints; the recipient is derived from the
//! token (`user` for job seekers, `admin` for both admin roles).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use jobboard_core::pagination::{clamp_limit, clamp_offset, MAX_PAGE_SIZE};
use jobboard_core::types::DbId;
use jobboard_db::models::notification::Notification;
use jobboard_db::repositories::NotificationRepo;
use serde::{Deserialize, Serialize};

use crate::error::{not_found, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const DEFAULT_NOTIFICATION_LIMIT: i64 = 50;

#[derive(Debug, Default, Deserialize)]
pub struct NotificationListParams {
    pub unread_only: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct UnreadCount {
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct MarkAllReadResult {
    pub marked_read: u64,
}

/// GET /api/notifications
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<NotificationListParams>,
) -> AppResult<Json<DataResponse<Vec<Notification>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_NOTIFICATION_LIMIT, MAX_PAGE_SIZE);
    let offset = clamp_offset(params.offset);
    let data = NotificationRepo::list_for_recipient(
        &state.pool,
        auth.principal_kind(),
        auth.subject_id,
        params.unread_only.unwrap_or(false),
        limit,
        offset,
    )
    .await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<UnreadCount>>> {
    let count =
        NotificationRepo::unread_count(&state.pool, auth.principal_kind(), auth.subject_id).await?;
    Ok(Json(DataResponse {
        data: UnreadCount { count },
    }))
}

/// POST /api/notifications/{id}/read
///
/// Notifications belonging to someone else, or already read, are not found.
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let marked =
        NotificationRepo::mark_read(&state.pool, id, auth.principal_kind(), auth.subject_id).await?;
    if !marked {
        return Err(not_found("Notification", id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<MarkAllReadResult>>> {
    let marked_read =
        NotificationRepo::mark_all_read(&state.pool, auth.principal_kind(), auth.subject_id)
            .await?;
    tracing::debug!(subject_id = auth.subject_id, marked_read, "Notifications marked read");
    Ok(Json(DataResponse {
        data: MarkAllReadResult { marked_read },
    }))
}
