//! Route definitions for multipart uploads.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Routes mounted at `/uploads`.
///
/// The size limit is enforced while streaming, so the default body limit is
/// lifted here.
///
/// ```text
/// POST /resume   -> upload_resume (user)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/resume", post(uploads::upload_resume))
        .layer(DefaultBodyLimit::disable())
}

/// Routes mounted at `/admin/uploads`.
///
/// ```text
/// POST /image   -> upload_image
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/image", post(uploads::upload_image))
        .layer(DefaultBodyLimit::disable())
}
