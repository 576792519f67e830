//! Admin dashboard totals across users, jobs, applications and content.

use axum::extract::State;
use axum::Json;
use jobboard_db::models::stats::DashboardStats;
use jobboard_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/admin/stats
pub async fn dashboard(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<DashboardStats>>> {
    let stats = StatsRepo::dashboard(&state.pool).await?;
    Ok(Json(DataResponse { data: stats }))
}
