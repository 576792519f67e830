use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Routes mounted at `/admin/stats`.
///
/// ```text
/// GET /   -> dashboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(stats::dashboard))
}
