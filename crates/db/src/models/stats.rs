//! Admin dashboard aggregates.

use serde::Serialize;
use sqlx::FromRow;

/// A `(status, count)` pair from a `GROUP BY status` query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// Totals shown on the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_users: i64,
    pub active_users: i64,
    pub jobs_by_status: Vec<StatusCount>,
    pub applications_by_status: Vec<StatusCount>,
    pub inquiries_by_status: Vec<StatusCount>,
    pub pending_vacancies: i64,
    pub published_posts: i64,
}
