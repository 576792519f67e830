//! Route definitions for job seeker profiles and admin user management.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET  /me           -> get_me
/// PUT  /me           -> update_me
/// PUT  /me/password  -> change_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(users::get_me).put(users::update_me))
        .route("/me/password", put(users::change_password))
}

/// Routes mounted at `/admin/users`.
///
/// ```text
/// GET    /       -> list_users
/// GET    /{id}   -> get_user
/// DELETE /{id}   -> deactivate_user
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users))
        .route("/{id}", get(users::get_user).delete(users::deactivate_user))
}
