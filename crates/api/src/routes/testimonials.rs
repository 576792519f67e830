//! Route definitions for testimonials.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// Routes mounted at `/testimonials`.
///
/// ```text
/// GET  /   -> list_approved
/// POST /   -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(testimonials::list_approved).post(testimonials::submit))
}

/// Routes mounted at `/admin/testimonials`.
///
/// ```text
/// GET    /       -> admin_list
/// POST   /       -> admin_create
/// PUT    /{id}   -> admin_update
/// DELETE /{id}   -> admin_delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(testimonials::admin_list).post(testimonials::admin_create),
        )
        .route(
            "/{id}",
            put(testimonials::admin_update).delete(testimonials::admin_delete),
        )
}
