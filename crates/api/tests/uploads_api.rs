//! HTTP-level tests for resume and image uploads.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_multipart};
use jobboard_core::roles::ROLE_ADMIN;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn resume_upload_is_stored_and_linked_to_profile(pool: PgPool) {
    let config = common::test_config();
    let upload_dir = config.upload_dir.clone();
    let (_user, token) = common::user_with_token(&pool, "u@example.com").await;

    let response = post_multipart(
        common::build_test_app_with(pool.clone(), config),
        "/api/uploads/resume",
        &token,
        "file",
        "My CV.PDF",
        b"%PDF-1.4 test",
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let path = json["data"]["path"].as_str().unwrap().to_string();
    assert!(path.starts_with("resumes/"));
    assert!(path.ends_with(".pdf"));
    assert_eq!(json["data"]["url"], format!("/uploads/{path}"));

    let stored = std::fs::read(upload_dir.join(&path)).unwrap();
    assert_eq!(stored, b"%PDF-1.4 test");

    let response = get_auth(common::build_test_app(pool), "/api/users/me", &token).await;
    assert_eq!(body_json(response).await["data"]["resume_path"], path);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn resume_with_disallowed_extension_is_rejected(pool: PgPool) {
    let (_user, token) = common::user_with_token(&pool, "u@example.com").await;

    let response = post_multipart(
        common::build_test_app(pool),
        "/api/uploads/resume",
        &token,
        "file",
        "payload.exe",
        b"MZ",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn oversized_upload_is_rejected(pool: PgPool) {
    let (_user, token) = common::user_with_token(&pool, "u@example.com").await;
    // The test config caps uploads at 1024 bytes.
    let content = vec![b'a'; 2048];

    let response = post_multipart(
        common::build_test_app(pool),
        "/api/uploads/resume",
        &token,
        "file",
        "cv.pdf",
        &content,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_file_field_is_rejected(pool: PgPool) {
    let (_user, token) = common::user_with_token(&pool, "u@example.com").await;

    let response = post_multipart(
        common::build_test_app(pool),
        "/api/uploads/resume",
        &token,
        "attachment",
        "cv.pdf",
        b"%PDF",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn image_upload_is_admin_only(pool: PgPool) {
    let (_user, user_token) = common::user_with_token(&pool, "u@example.com").await;
    let (_admin, admin_token) = common::admin_with_token(&pool, "a@example.com", ROLE_ADMIN).await;

    let response = post_multipart(
        common::build_test_app(pool.clone()),
        "/api/admin/uploads/image",
        &user_token,
        "file",
        "cover.png",
        b"\x89PNG",
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_multipart(
        common::build_test_app(pool),
        "/api/admin/uploads/image",
        &admin_token,
        "file",
        "cover.png",
        b"\x89PNG",
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["path"].as_str().unwrap().starts_with("images/"));
}
