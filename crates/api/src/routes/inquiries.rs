//! Route definitions for staffing inquiries.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::inquiries;
use crate::state::AppState;

/// Routes mounted at `/inquiries`.
///
/// ```text
/// POST /   -> submit (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(inquiries::submit))
}

/// Routes mounted at `/admin/inquiries`.
///
/// ```text
/// GET    /       -> admin_list (?status=)
/// GET    /{id}   -> admin_get
/// PUT    /{id}   -> admin_update
/// DELETE /{id}   -> admin_delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/", get(inquiries::admin_list)).route(
        "/{id}",
        get(inquiries::admin_get)
            .put(inquiries::admin_update)
            .delete(inquiries::admin_delete),
    )
}
