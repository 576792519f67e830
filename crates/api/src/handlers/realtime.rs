//! Polling endpoints for clients that refresh on an interval.
//!
//! Notifications use an id cursor (`since_id`); jobs and applications use an
//! `updated_at` cursor (`since`, RFC 3339) so edits are picked up as well as
//! inserts.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{Duration, Utc};
use jobboard_core::status::JOB_STATUS_PUBLISHED;
use jobboard_core::types::{DbId, Timestamp};
use jobboard_db::models::application::ApplicationDetail;
use jobboard_db::models::job::Job;
use jobboard_db::models::notification::Notification;
use jobboard_db::repositories::{ApplicationRepo, JobRepo, NotificationRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum rows returned by a single poll.
pub const MAX_POLL_ITEMS: i64 = 100;

/// Lookback window when no `since` is supplied.
const DEFAULT_LOOKBACK_HOURS: i64 = 24;

#[derive(Debug, Default, Deserialize)]
pub struct SinceIdParams {
    pub since_id: Option<DbId>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SinceParams {
    pub since: Option<Timestamp>,
}

impl SinceParams {
    fn resolve(&self) -> Timestamp {
        self.since
            .unwrap_or_else(|| Utc::now() - Duration::hours(DEFAULT_LOOKBACK_HOURS))
    }
}

#[derive(Debug, Serialize)]
pub struct NotificationFeed {
    pub items: Vec<Notification>,
    /// Highest id returned, or the supplied cursor when nothing is new.
    pub latest_id: DbId,
    pub server_time: Timestamp,
}

#[derive(Debug, Serialize)]
pub struct Feed<T: Serialize> {
    pub items: Vec<T>,
    pub server_time: Timestamp,
}

/// GET /api/realtime/notifications?since_id=
pub async fn notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<SinceIdParams>,
) -> AppResult<Json<DataResponse<NotificationFeed>>> {
    let since_id = params.since_id.unwrap_or(0).max(0);
    let items = NotificationRepo::list_since(
        &state.pool,
        auth.principal_kind(),
        auth.subject_id,
        since_id,
        MAX_POLL_ITEMS,
    )
    .await?;
    let latest_id = items.iter().map(|n| n.id).max().unwrap_or(since_id);

    Ok(Json(DataResponse {
        data: NotificationFeed {
            items,
            latest_id,
            server_time: Utc::now(),
        },
    }))
}

/// GET /api/realtime/jobs?since=
pub async fn jobs(
    State(state): State<AppState>,
    Query(params): Query<SinceParams>,
) -> AppResult<Json<DataResponse<Feed<Job>>>> {
    let items = JobRepo::list_updated_since(
        &state.pool,
        JOB_STATUS_PUBLISHED,
        params.resolve(),
        MAX_POLL_ITEMS,
    )
    .await?;
    Ok(Json(DataResponse {
        data: Feed {
            items,
            server_time: Utc::now(),
        },
    }))
}

/// GET /api/realtime/applications?since=
///
/// Admins see every application; job seekers only their own.
pub async fn applications(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<SinceParams>,
) -> AppResult<Json<DataResponse<Feed<ApplicationDetail>>>> {
    let scope = (!auth.is_admin()).then_some(auth.subject_id);
    let items =
        ApplicationRepo::list_updated_since(&state.pool, scope, params.resolve(), MAX_POLL_ITEMS)
            .await?;
    Ok(Json(DataResponse {
        data: Feed {
            items,
            server_time: Utc::now(),
        },
    }))
}
