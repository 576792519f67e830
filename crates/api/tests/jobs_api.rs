//! HTTP-level tests for job search and admin job management.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, get_auth, post_json_auth, put_json_auth};
use jobboard_core::roles::ROLE_ADMIN;
use sqlx::PgPool;

fn job_body(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "company": "Acme Logistics",
        "location": "Leeds",
        "description": "Move pallets safely.",
        "salary_min": 24000,
        "salary_max": 28000,
    })
}

async fn create_job(pool: &PgPool, token: &str, body: serde_json::Value) -> serde_json::Value {
    let response =
        post_json_auth(common::build_test_app(pool.clone()), "/api/admin/jobs", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_created_job_defaults_to_published(pool: PgPool) {
    let (admin, token) = common::admin_with_token(&pool, "a@example.com", ROLE_ADMIN).await;

    let job = create_job(&pool, &token, job_body("Forklift Operator")).await;

    assert_eq!(job["status"], "published");
    assert_eq!(job["job_type"], "full_time");
    assert_eq!(job["posted_by"], admin.id);

    let response = get(common::build_test_app(pool), &format!("/api/jobs/{}", job["id"])).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn draft_jobs_are_hidden_from_the_public(pool: PgPool) {
    let (_admin, token) = common::admin_with_token(&pool, "a@example.com", ROLE_ADMIN).await;
    let mut body = job_body("Secret Role");
    body["status"] = "draft".into();
    let job = create_job(&pool, &token, body).await;

    let path = format!("/api/jobs/{}", job["id"]);
    let response = get(common::build_test_app(pool.clone()), &path).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(common::build_test_app(pool.clone()), "/api/jobs").await;
    assert_eq!(body_json(response).await["total"], 0);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/admin/jobs/{}", job["id"]),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_filters_and_paginates(pool: PgPool) {
    let (_admin, token) = common::admin_with_token(&pool, "a@example.com", ROLE_ADMIN).await;
    create_job(&pool, &token, job_body("Warehouse Picker")).await;
    create_job(&pool, &token, job_body("Warehouse Supervisor")).await;
    let mut remote = job_body("Remote Recruiter");
    remote["is_remote"] = true.into();
    remote["job_type"] = "contract".into();
    create_job(&pool, &token, remote).await;

    let response = get(common::build_test_app(pool.clone()), "/api/jobs?q=warehouse&limit=1").await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 2);
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let response = get(
        common::build_test_app(pool),
        "/api/jobs?is_remote=true&job_type=contract",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["title"], "Remote Recruiter");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rejects_invalid_input(pool: PgPool) {
    let (_admin, token) = common::admin_with_token(&pool, "a@example.com", ROLE_ADMIN).await;

    let mut inverted = job_body("Driver");
    inverted["salary_min"] = 50000.into();
    inverted["salary_max"] = 10000.into();
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/admin/jobs",
        &token,
        inverted,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut bad_type = job_body("Driver");
    bad_type["job_type"] = "gig".into();
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/admin/jobs",
        &token,
        bad_type,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/admin/jobs",
        &token,
        job_body("   "),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_patches_and_delete_removes(pool: PgPool) {
    let (_admin, token) = common::admin_with_token(&pool, "a@example.com", ROLE_ADMIN).await;
    let job = create_job(&pool, &token, job_body("Packer")).await;
    let path = format!("/api/admin/jobs/{}", job["id"]);

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &path,
        &token,
        serde_json::json!({ "status": "closed", "location": "York" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "closed");
    assert_eq!(json["data"]["location"], "York");
    assert_eq!(json["data"]["title"], "Packer");

    let response = delete_auth(common::build_test_app(pool.clone()), &path, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(common::build_test_app(pool), &path, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
