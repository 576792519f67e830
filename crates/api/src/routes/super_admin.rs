//! Route definitions for super-admin staff management.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::super_admin;
use crate::state::AppState;

/// Routes mounted at `/super-admin`.
///
/// All routes require the `super_admin` role (enforced by handler
/// extractors).
///
/// ```text
/// GET    /admins                       -> list_admins
/// POST   /admins                       -> create_admin
/// PUT    /admins/{id}                  -> update_admin
/// DELETE /admins/{id}                  -> delete_admin
/// POST   /admins/{id}/reset-password   -> reset_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/admins",
            get(super_admin::list_admins).post(super_admin::create_admin),
        )
        .route(
            "/admins/{id}",
            put(super_admin::update_admin).delete(super_admin::delete_admin),
        )
        .route(
            "/admins/{id}/reset-password",
            post(super_admin::reset_password),
        )
}
