//! Route definitions for in-app notifications and realtime polling.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{notifications, realtime};
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET  /               -> list (?unread_only=&limit=&offset=)
/// GET  /unread-count   -> unread_count
/// POST /read-all       -> mark_all_read
/// POST /{id}/read      -> mark_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notifications::list))
        .route("/unread-count", get(notifications::unread_count))
        .route("/read-all", post(notifications::mark_all_read))
        .route("/{id}/read", post(notifications::mark_read))
}

/// Routes mounted at `/realtime`.
///
/// ```text
/// GET /notifications   -> notifications (?since_id=)
/// GET /jobs            -> jobs (?since=, public)
/// GET /applications    -> applications (?since=)
/// ```
pub fn realtime_router() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(realtime::notifications))
        .route("/jobs", get(realtime::jobs))
        .route("/applications", get(realtime::applications))
}
