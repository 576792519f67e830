//! Route definitions for employer-submitted vacancies.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::vacancies;
use crate::state::AppState;

/// Routes mounted at `/vacancies`.
///
/// ```text
/// POST /   -> submit (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(vacancies::submit))
}

/// Routes mounted at `/admin/vacancies`.
///
/// ```text
/// GET    /               -> admin_list (?status=)
/// GET    /{id}           -> admin_get
/// DELETE /{id}           -> admin_delete
/// PUT    /{id}/status    -> update_status
/// POST   /{id}/publish   -> publish
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(vacancies::admin_list))
        .route(
            "/{id}",
            get(vacancies::admin_get).delete(vacancies::admin_delete),
        )
        .route("/{id}/status", put(vacancies::update_status))
        .route("/{id}/publish", post(vacancies::publish))
}
