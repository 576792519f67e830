//! Aggregate queries for the admin dashboard.

use jobboard_core::status::VACANCY_STATUS_PENDING;
use sqlx::PgPool;

use crate::models::stats::DashboardStats;
use crate::repositories::{ApplicationRepo, InquiryRepo, JobRepo};

pub struct StatsRepo;

impl StatsRepo {
    pub async fn dashboard(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        let (total_users, active_users): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE is_active) FROM users",
        )
        .fetch_one(pool)
        .await?;

        let pending_vacancies: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM vacancies WHERE status = $1")
                .bind(VACANCY_STATUS_PENDING)
                .fetch_one(pool)
                .await?;

        let published_posts: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM blog_posts WHERE is_published")
                .fetch_one(pool)
                .await?;

        Ok(DashboardStats {
            total_users,
            active_users,
            jobs_by_status: JobRepo::count_by_status(pool).await?,
            applications_by_status: ApplicationRepo::count_by_status(pool).await?,
            inquiries_by_status: InquiryRepo::count_by_status(pool).await?,
            pending_vacancies,
            published_posts,
        })
    }
}
