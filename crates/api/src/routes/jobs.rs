//! Route definitions for job postings.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{applications, jobs};
use crate::state::AppState;

/// Routes mounted at `/jobs`.
///
/// ```text
/// GET  /              -> list_jobs (published only)
/// GET  /{id}          -> get_job
/// POST /{id}/apply    -> applications::apply (user)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(jobs::list_jobs))
        .route("/{id}", get(jobs::get_job))
        .route("/{id}/apply", post(applications::apply))
}

/// Routes mounted at `/admin/jobs`.
///
/// ```text
/// GET    /       -> admin_list_jobs
/// POST   /       -> create_job
/// GET    /{id}   -> admin_get_job
/// PUT    /{id}   -> update_job
/// DELETE /{id}   -> delete_job
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(jobs::admin_list_jobs).post(jobs::create_job))
        .route(
            "/{id}",
            get(jobs::admin_get_job)
                .put(jobs::update_job)
                .delete(jobs::delete_job),
        )
}
