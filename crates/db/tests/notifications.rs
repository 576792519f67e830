//! Integration tests for per-recipient notifications.

use jobboard_db::models::notification::NewNotification;
use jobboard_db::repositories::NotificationRepo;
use sqlx::PgPool;

fn note(title: &str) -> NewNotification {
    NewNotification {
        kind: "application.submitted".to_string(),
        title: title.to_string(),
        message: "Someone applied".to_string(),
        link: Some("/admin/applications/1".to_string()),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_notifications_are_scoped_to_recipient(pool: PgPool) {
    NotificationRepo::create(&pool, "user", 1, &note("For user 1")).await.unwrap();
    NotificationRepo::create(&pool, "admin", 1, &note("For admin 1")).await.unwrap();

    let user_rows = NotificationRepo::list_for_recipient(&pool, "user", 1, false, 50, 0)
        .await
        .unwrap();
    assert_eq!(user_rows.len(), 1);
    assert_eq!(user_rows[0].title, "For user 1");

    // Same id, different role: not visible and not markable.
    let admin_row = NotificationRepo::list_for_recipient(&pool, "admin", 1, false, 50, 0)
        .await
        .unwrap()
        .remove(0);
    assert!(!NotificationRepo::mark_read(&pool, admin_row.id, "user", 1)
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bulk_create_and_read_state(pool: PgPool) {
    let inserted = NotificationRepo::create_for_recipients(&pool, "admin", &[1, 2, 3], &note("New"))
        .await
        .unwrap();
    assert_eq!(inserted, 3);
    assert_eq!(
        NotificationRepo::create_for_recipients(&pool, "admin", &[], &note("None"))
            .await
            .unwrap(),
        0
    );

    NotificationRepo::create(&pool, "admin", 2, &note("Second")).await.unwrap();
    assert_eq!(NotificationRepo::unread_count(&pool, "admin", 2).await.unwrap(), 2);

    let unread = NotificationRepo::list_for_recipient(&pool, "admin", 2, true, 50, 0)
        .await
        .unwrap();
    assert!(NotificationRepo::mark_read(&pool, unread[0].id, "admin", 2)
        .await
        .unwrap());
    assert_eq!(NotificationRepo::unread_count(&pool, "admin", 2).await.unwrap(), 1);

    assert_eq!(NotificationRepo::mark_all_read(&pool, "admin", 2).await.unwrap(), 1);
    assert_eq!(NotificationRepo::unread_count(&pool, "admin", 2).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_since_is_ascending_and_exclusive(pool: PgPool) {
    let first = NotificationRepo::create(&pool, "user", 7, &note("one")).await.unwrap();
    let second = NotificationRepo::create(&pool, "user", 7, &note("two")).await.unwrap();
    let third = NotificationRepo::create(&pool, "user", 7, &note("three")).await.unwrap();

    let delta = NotificationRepo::list_since(&pool, "user", 7, first.id, 100)
        .await
        .unwrap();
    let ids: Vec<i64> = delta.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![second.id, third.id]);

    let empty = NotificationRepo::list_since(&pool, "user", 7, third.id, 100)
        .await
        .unwrap();
    assert!(empty.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_retention_deletes_only_old_read(pool: PgPool) {
    let old_read = NotificationRepo::create(&pool, "user", 1, &note("old read")).await.unwrap();
    let old_unread = NotificationRepo::create(&pool, "user", 1, &note("old unread")).await.unwrap();
    NotificationRepo::mark_read(&pool, old_read.id, "user", 1).await.unwrap();
    sqlx::query(
        "UPDATE notifications SET created_at = NOW() - INTERVAL '120 days' WHERE id = ANY($1)",
    )
        .bind(vec![old_read.id, old_unread.id])
        .execute(&pool)
        .await
        .unwrap();

    let deleted = NotificationRepo::delete_read_older_than(&pool, 90).await.unwrap();
    assert_eq!(deleted, 1);
    assert_eq!(NotificationRepo::unread_count(&pool, "user", 1).await.unwrap(), 1);
}
