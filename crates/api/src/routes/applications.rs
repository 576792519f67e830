//! Route definitions for job applications.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::applications;
use crate::state::AppState;

/// Routes mounted at `/applications`.
///
/// ```text
/// GET    /mine   -> list_mine
/// DELETE /{id}   -> withdraw
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/mine", get(applications::list_mine))
        .route("/{id}", delete(applications::withdraw))
}

/// Routes mounted at `/admin/applications`.
///
/// ```text
/// GET /              -> admin_list
/// GET /{id}          -> admin_get
/// PUT /{id}/status   -> update_status
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(applications::admin_list))
        .route("/{id}", get(applications::admin_get))
        .route("/{id}/status", put(applications::update_status))
}
