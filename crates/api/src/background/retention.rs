//! Daily cleanup of read notifications and dead refresh-token sessions.

use std::time::Duration;

use jobboard_db::repositories::{NotificationRepo, SessionRepo};
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

/// Read notifications older than this are deleted.
pub const NOTIFICATION_RETENTION_DAYS: i32 = 90;

const CLEANUP_INTERVAL: Duration = Duration::from_secs(24 * 3600);

/// Run the retention loop until `cancel` is triggered. The first pass runs
/// immediately on start.
pub async fn run(pool: PgPool, cancel: CancellationToken) {
    tracing::info!(
        retention_days = NOTIFICATION_RETENTION_DAYS,
        interval_secs = CLEANUP_INTERVAL.as_secs(),
        "Retention job started"
    );

    let mut interval = tokio::time::interval(CLEANUP_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Retention job stopping");
                break;
            }
            _ = interval.tick() => run_once(&pool).await,
        }
    }
}

/// One cleanup pass. Errors are logged; the next tick tries again.
pub async fn run_once(pool: &PgPool) {
    match NotificationRepo::delete_read_older_than(pool, NOTIFICATION_RETENTION_DAYS).await {
        Ok(0) => tracing::debug!("Retention: no notifications to purge"),
        Ok(deleted) => tracing::info!(deleted, "Retention: purged read notifications"),
        Err(e) => tracing::error!(error = %e, "Retention: notification cleanup failed"),
    }

    match SessionRepo::cleanup_expired(pool).await {
        Ok(0) => {}
        Ok(deleted) => tracing::info!(deleted, "Retention: purged expired sessions"),
        Err(e) => tracing::error!(error = %e, "Retention: session cleanup failed"),
    }
}
