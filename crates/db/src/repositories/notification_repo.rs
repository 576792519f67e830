//! Repository for the `notifications` table.

use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::{NewNotification, Notification};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, recipient_role, recipient_id, kind, title, message, link, is_read, \
                        read_at, created_at";

/// Provides operations for per-principal in-app notifications.
///
/// A recipient is identified by `(recipient_role, recipient_id)` where the
/// role is `"user"` or `"admin"`. Every read and write is scoped to it.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Insert a notification for a single recipient.
    pub async fn create(
        pool: &PgPool,
        recipient_role: &str,
        recipient_id: DbId,
        input: &NewNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications (recipient_role, recipient_id, kind, title, message, link)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(recipient_role)
            .bind(recipient_id)
            .bind(&input.kind)
            .bind(&input.title)
            .bind(&input.message)
            .bind(&input.link)
            .fetch_one(pool)
            .await
    }

    /// Insert the same notification for many recipients sharing one role.
    ///
    /// Returns the number of rows inserted.
    pub async fn create_for_recipients(
        pool: &PgPool,
        recipient_role: &str,
        recipient_ids: &[DbId],
        input: &NewNotification,
    ) -> Result<u64, sqlx::Error> {
        if recipient_ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query(
            "INSERT INTO notifications (recipient_role, recipient_id, kind, title, message, link)
             SELECT $1, rid, $3, $4, $5, $6 FROM UNNEST($2::BIGINT[]) AS t(rid)",
        )
        .bind(recipient_role)
        .bind(recipient_ids)
        .bind(&input.kind)
        .bind(&input.title)
        .bind(&input.message)
        .bind(&input.link)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// List a recipient's notifications, newest first.
    pub async fn list_for_recipient(
        pool: &PgPool,
        recipient_role: &str,
        recipient_id: DbId,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications
             WHERE recipient_role = $1 AND recipient_id = $2 AND (NOT $3 OR NOT is_read)
             ORDER BY id DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(recipient_role)
            .bind(recipient_id)
            .bind(unread_only)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Notifications with `id > since_id`, oldest first. Used as the realtime
    /// delta feed; the caller advances its cursor to the last returned id.
    pub async fn list_since(
        pool: &PgPool,
        recipient_role: &str,
        recipient_id: DbId,
        since_id: DbId,
        limit: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications
             WHERE recipient_role = $1 AND recipient_id = $2 AND id > $3
             ORDER BY id ASC
             LIMIT $4"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(recipient_role)
            .bind(recipient_id)
            .bind(since_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Mark one unread notification read. Returns `false` if it does not
    /// exist, belongs to another recipient, or was already read.
    pub async fn mark_read(
        pool: &PgPool,
        id: DbId,
        recipient_role: &str,
        recipient_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = true, read_at = NOW()
             WHERE id = $1 AND recipient_role = $2 AND recipient_id = $3 AND NOT is_read",
        )
        .bind(id)
        .bind(recipient_role)
        .bind(recipient_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark every unread notification of a recipient read. Returns the count changed.
    pub async fn mark_all_read(
        pool: &PgPool,
        recipient_role: &str,
        recipient_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = true, read_at = NOW()
             WHERE recipient_role = $1 AND recipient_id = $2 AND NOT is_read",
        )
        .bind(recipient_role)
        .bind(recipient_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn unread_count(
        pool: &PgPool,
        recipient_role: &str,
        recipient_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications
             WHERE recipient_role = $1 AND recipient_id = $2 AND NOT is_read",
        )
        .bind(recipient_role)
        .bind(recipient_id)
        .fetch_one(pool)
        .await
    }

    /// Delete read notifications created more than `days` days ago.
    pub async fn delete_read_older_than(pool: &PgPool, days: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM notifications
             WHERE is_read AND created_at < NOW() - make_interval(days => $1)",
        )
        .bind(days)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
