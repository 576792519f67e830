//! Role enforcement across the route tree.

mod common;

use axum::http::StatusCode;
use common::{get, get_auth};
use jobboard_core::roles::{ROLE_ADMIN, ROLE_SUPER_ADMIN};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_token_is_unauthorized(pool: PgPool) {
    for uri in [
        "/api/users/me",
        "/api/applications/mine",
        "/api/admin/jobs",
        "/api/super-admin/admins",
    ] {
        let response = get(common::build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn garbage_token_is_unauthorized(pool: PgPool) {
    let response = get_auth(common::build_test_app(pool), "/api/users/me", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn job_seeker_cannot_reach_admin_routes(pool: PgPool) {
    let (_user, token) = common::user_with_token(&pool, "u@example.com").await;

    for uri in [
        "/api/admin/jobs",
        "/api/admin/users",
        "/api/admin/stats",
        "/api/super-admin/admins",
    ] {
        let response = get_auth(common::build_test_app(pool.clone()), uri, &token).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_cannot_use_job_seeker_routes(pool: PgPool) {
    let (_admin, token) = common::admin_with_token(&pool, "a@example.com", ROLE_ADMIN).await;

    let response = get_auth(common::build_test_app(pool), "/api/users/me", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn only_super_admin_manages_staff(pool: PgPool) {
    let (_admin, admin_token) = common::admin_with_token(&pool, "a@example.com", ROLE_ADMIN).await;
    let (_root, root_token) =
        common::admin_with_token(&pool, "root@example.com", ROLE_SUPER_ADMIN).await;

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/super-admin/admins",
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/super-admin/admins",
        &root_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Super admins pass every admin gate.
    let response = get_auth(common::build_test_app(pool), "/api/admin/stats", &root_token).await;
    assert_eq!(response.status(), StatusCode::OK);
}
