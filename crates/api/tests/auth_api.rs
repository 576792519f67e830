//! HTTP-level tests for registration, login, refresh, logout and lockout.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth, TEST_PASSWORD};
use jobboard_core::roles::{ROLE_ADMIN, ROLE_SUPER_ADMIN};
use jobboard_db::repositories::UserRepo;
use sqlx::PgPool;

async fn login(
    app: axum::Router,
    path: &str,
    email: &str,
    password: &str,
) -> axum::response::Response {
    post_json(
        app,
        path,
        serde_json::json!({ "email": email, "password": password }),
    )
    .await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_returns_tokens_and_profile(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "full_name": "Jane Seeker",
        "email": "Jane@Example.com",
        "password": "longenough",
    });

    let response = post_json(app, "/api/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["access_token"].is_string());
    assert!(json["data"]["refresh_token"].is_string());
    assert_eq!(json["data"]["expires_in"], 15 * 60);
    assert_eq!(json["data"]["principal"]["email"], "jane@example.com");
    assert_eq!(json["data"]["principal"]["role"], "user");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_duplicate_email_is_conflict(pool: PgPool) {
    common::create_user(&pool, "taken@example.com").await;
    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "full_name": "Someone",
        "email": "taken@example.com",
        "password": "longenough",
    });

    let response = post_json(app, "/api/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_bad_email_and_short_password(pool: PgPool) {
    let bad_email = serde_json::json!({
        "full_name": "Someone",
        "email": "not-an-email",
        "password": "longenough",
    });
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/auth/register",
        bad_email,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let short_password = serde_json::json!({
        "full_name": "Someone",
        "email": "someone@example.com",
        "password": "short",
    });
    let response = post_json(
        common::build_test_app(pool),
        "/api/auth/register",
        short_password,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn user_login_success_and_wrong_password(pool: PgPool) {
    let user = common::create_user(&pool, "seeker@example.com").await;

    let response = login(
        common::build_test_app(pool.clone()),
        "/api/auth/login",
        "seeker@example.com",
        TEST_PASSWORD,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["principal"]["id"], user.id);

    let response = login(
        common::build_test_app(pool),
        "/api/auth/login",
        "seeker@example.com",
        "incorrect",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_cannot_use_user_login(pool: PgPool) {
    common::create_admin(&pool, "staff@example.com", ROLE_ADMIN).await;

    let response = login(
        common::build_test_app(pool.clone()),
        "/api/auth/login",
        "staff@example.com",
        TEST_PASSWORD,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = login(
        common::build_test_app(pool),
        "/api/admin/auth/login",
        "staff@example.com",
        TEST_PASSWORD,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["principal"]["role"], "admin");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inactive_user_is_forbidden(pool: PgPool) {
    let user = common::create_user(&pool, "gone@example.com").await;
    UserRepo::deactivate(&pool, user.id).await.unwrap();

    let response = login(
        common::build_test_app(pool),
        "/api/auth/login",
        "gone@example.com",
        TEST_PASSWORD,
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn five_failures_lock_the_account(pool: PgPool) {
    common::create_user(&pool, "locked@example.com").await;

    for _ in 0..5 {
        let response = login(
            common::build_test_app(pool.clone()),
            "/api/auth/login",
            "locked@example.com",
            "wrong-password",
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Correct password is still refused while the lock holds.
    let response = login(
        common::build_test_app(pool),
        "/api/auth/login",
        "locked@example.com",
        TEST_PASSWORD,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn expired_lock_starts_a_fresh_failure_window(pool: PgPool) {
    let user = common::create_user(&pool, "typo@example.com").await;
    let attempt = |password: &'static str| {
        login(
            common::build_test_app(pool.clone()),
            "/api/auth/login",
            "typo@example.com",
            password,
        )
    };

    for _ in 0..5 {
        assert_eq!(attempt("wrong-password").await.status(), StatusCode::UNAUTHORIZED);
    }
    sqlx::query("UPDATE users SET locked_until = NOW() - INTERVAL '1 minute' WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    // One typo after the lock lapses must not lock the account again.
    assert_eq!(attempt("wrong-password").await.status(), StatusCode::UNAUTHORIZED);
    let stored = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(stored.failed_login_count, 1);
    assert!(stored.locked_until.map_or(true, |until| until < chrono::Utc::now()));

    assert_eq!(attempt(TEST_PASSWORD).await.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_rotates_token_for_admins(pool: PgPool) {
    common::create_admin(&pool, "root@example.com", ROLE_SUPER_ADMIN).await;
    let response = login(
        common::build_test_app(pool.clone()),
        "/api/admin/auth/login",
        "root@example.com",
        TEST_PASSWORD,
    )
    .await;
    let refresh_token = body_json(response).await["data"]["refresh_token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["principal"]["role"], "super_admin");
    assert_ne!(json["data"]["refresh_token"].as_str().unwrap(), refresh_token);

    // The old token was revoked by the rotation.
    let response = post_json(
        common::build_test_app(pool),
        "/api/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_revokes_refresh_tokens(pool: PgPool) {
    common::create_user(&pool, "bye@example.com").await;
    let response = login(
        common::build_test_app(pool.clone()),
        "/api/auth/login",
        "bye@example.com",
        TEST_PASSWORD,
    )
    .await;
    let json = body_json(response).await;
    let access = json["data"]["access_token"].as_str().unwrap();
    let refresh = json["data"]["refresh_token"].as_str().unwrap();

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/auth/logout",
        access,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_json(
        common::build_test_app(pool),
        "/api/auth/refresh",
        serde_json::json!({ "refresh_token": refresh }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_returns_user_or_admin_profile(pool: PgPool) {
    let (user, user_token) = common::user_with_token(&pool, "me@example.com").await;
    let (admin, admin_token) =
        common::admin_with_token(&pool, "boss@example.com", ROLE_ADMIN).await;

    let response =
        get_auth(common::build_test_app(pool.clone()), "/api/auth/me", &user_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], user.id);
    assert!(json["data"].get("password_hash").is_none());

    let response = get_auth(common::build_test_app(pool), "/api/auth/me", &admin_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], admin.id);
    assert_eq!(json["data"]["role"], "admin");
}
