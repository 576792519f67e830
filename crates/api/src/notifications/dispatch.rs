//! In-app notification fan-out.
//!
//! Handlers call these after their primary write has succeeded. A failure to
//! record a notification is logged and does not fail the request.

use jobboard_core::roles::{ROLE_ADMIN, ROLE_USER};
use jobboard_core::types::DbId;
use jobboard_db::models::notification::NewNotification;
use jobboard_db::repositories::{AdminRepo, NotificationRepo};
use jobboard_db::DbPool;

pub const KIND_APPLICATION_SUBMITTED: &str = "application.submitted";
pub const KIND_APPLICATION_STATUS: &str = "application.status_changed";
pub const KIND_INQUIRY_CREATED: &str = "inquiry.created";
pub const KIND_VACANCY_SUBMITTED: &str = "vacancy.submitted";

/// Build a notification body.
pub fn message(
    kind: &str,
    title: impl Into<String>,
    message: impl Into<String>,
    link: Option<String>,
) -> NewNotification {
    NewNotification {
        kind: kind.to_string(),
        title: title.into(),
        message: message.into(),
        link,
    }
}

/// Notify every active admin. Returns how many notifications were written.
pub async fn notify_admins(pool: &DbPool, notification: &NewNotification) -> u64 {
    let result = async {
        let admin_ids = AdminRepo::list_active_ids(pool).await?;
        NotificationRepo::create_for_recipients(pool, ROLE_ADMIN, &admin_ids, notification).await
    }
    .await;

    match result {
        Ok(count) => {
            tracing::debug!(kind = %notification.kind, count, "Admin notifications created");
            count
        }
        Err(e) => {
            tracing::warn!(error = %e, kind = %notification.kind, "Failed to notify admins");
            0
        }
    }
}

/// Notify a single job seeker.
pub async fn notify_user(pool: &DbPool, user_id: DbId, notification: &NewNotification) {
    if let Err(e) = NotificationRepo::create(pool, ROLE_USER, user_id, notification).await {
        tracing::warn!(error = %e, user_id, kind = %notification.kind, "Failed to notify user");
    }
}
