//! Integration tests for user, admin and session repositories.

use chrono::{Duration, Utc};
use jobboard_db::models::admin::{CreateAdmin, UpdateAdmin};
use jobboard_db::models::session::CreateSession;
use jobboard_db::models::user::{CreateUser, UpdateProfile};
use jobboard_db::repositories::{AdminRepo, SessionRepo, UserRepo};
use sqlx::PgPool;

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        full_name: "Jane Seeker".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        phone: None,
    }
}

fn new_admin(email: &str, role: &str) -> CreateAdmin {
    CreateAdmin {
        full_name: "Ada Admin".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        role: role.to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_email_is_case_insensitive_and_unique(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Jane@Example.com")).await.unwrap();
    assert_eq!(user.email, "jane@example.com");

    let found = UserRepo::find_by_email(&pool, "JANE@example.COM").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(user.id));

    let err = UserRepo::create(&pool, &new_user("jane@example.com"))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.constraint(), Some("uq_users_email"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_search_and_count(pool: PgPool) {
    UserRepo::create(&pool, &new_user("alpha@example.com")).await.unwrap();
    UserRepo::create(&pool, &new_user("beta@example.com")).await.unwrap();

    assert_eq!(UserRepo::count(&pool, None).await.unwrap(), 2);
    assert_eq!(UserRepo::count(&pool, Some("alpha")).await.unwrap(), 1);

    let page = UserRepo::list(&pool, Some("example"), 1, 0).await.unwrap();
    assert_eq!(page.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile_only_touches_given_fields(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("p@example.com")).await.unwrap();
    let update = UpdateProfile {
        headline: Some("Rust developer".to_string()),
        ..Default::default()
    };
    let updated = UserRepo::update_profile(&pool, user.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.headline.as_deref(), Some("Rust developer"));
    assert_eq!(updated.full_name, user.full_name);

    let missing = UserRepo::update_profile(&pool, 999_999, &update).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_bookkeeping(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("l@example.com")).await.unwrap();
    UserRepo::increment_failed_login(&pool, user.id).await.unwrap();
    UserRepo::lock_account(&pool, user.id, Utc::now() + Duration::minutes(15))
        .await
        .unwrap();
    let locked = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(locked.failed_login_count, 0);
    assert!(locked.locked_until.is_some());

    UserRepo::record_successful_login(&pool, user.id).await.unwrap();
    let reset = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(reset.failed_login_count, 0);
    assert!(reset.locked_until.is_none());
    assert!(reset.last_login_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_role_check_constraint(pool: PgPool) {
    let err = AdminRepo::create(&pool, &new_admin("x@example.com", "owner"))
        .await
        .unwrap_err();
    assert!(err.as_database_error().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_active_admin_queries(pool: PgPool) {
    let sa = AdminRepo::create(&pool, &new_admin("sa@example.com", "super_admin"))
        .await
        .unwrap();
    let a = AdminRepo::create(&pool, &new_admin("a@example.com", "admin"))
        .await
        .unwrap();

    assert_eq!(AdminRepo::count_active_by_role(&pool, "super_admin").await.unwrap(), 1);

    assert!(AdminRepo::deactivate(&pool, a.id).await.unwrap());
    let ids = AdminRepo::list_active_ids(&pool).await.unwrap();
    assert_eq!(ids, vec![sa.id]);

    let update = UpdateAdmin {
        full_name: Some("Renamed".to_string()),
        role: None,
        is_active: None,
    };
    let updated = AdminRepo::update(&pool, sa.id, &update).await.unwrap().unwrap();
    assert_eq!(updated.full_name, "Renamed");
    assert_eq!(updated.role, "super_admin");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_revocation(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("s@example.com")).await.unwrap();
    let input = CreateSession {
        subject_role: "user".to_string(),
        subject_id: user.id,
        refresh_token_hash: "abc123".to_string(),
        expires_at: Utc::now() + Duration::days(7),
    };
    let session = SessionRepo::create(&pool, &input).await.unwrap();

    let found = SessionRepo::find_by_refresh_token_hash(&pool, "abc123")
        .await
        .unwrap();
    assert_eq!(found.map(|s| s.id), Some(session.id));

    let revoked = SessionRepo::revoke_all_for_subject(&pool, "user", user.id)
        .await
        .unwrap();
    assert_eq!(revoked, 1);
    let after = SessionRepo::find_by_refresh_token_hash(&pool, "abc123")
        .await
        .unwrap();
    assert!(after.is_none());
}
