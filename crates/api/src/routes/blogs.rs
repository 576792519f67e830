//! Route definitions for blog posts.

use axum::routing::get;
use axum::Router;

use crate::handlers::blogs;
use crate::state::AppState;

/// Routes mounted at `/blogs`.
///
/// ```text
/// GET /          -> list_published
/// GET /{slug}    -> get_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(blogs::list_published))
        .route("/{slug}", get(blogs::get_by_slug))
}

/// Routes mounted at `/admin/blogs`.
///
/// ```text
/// GET    /       -> admin_list
/// POST   /       -> create_post
/// GET    /{id}   -> admin_get
/// PUT    /{id}   -> update_post
/// DELETE /{id}   -> delete_post
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(blogs::admin_list).post(blogs::create_post))
        .route(
            "/{id}",
            get(blogs::admin_get)
                .put(blogs::update_post)
                .delete(blogs::delete_post),
        )
}
