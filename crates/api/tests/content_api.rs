//! HTTP-level tests for the blog, testimonials, staffing inquiries and
//! vacancy submissions.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, post_json_auth, put_json_auth};
use jobboard_core::roles::ROLE_ADMIN;
use jobboard_db::repositories::NotificationRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

async fn create_post(pool: &PgPool, token: &str, body: serde_json::Value) -> serde_json::Value {
    let response =
        post_json_auth(common::build_test_app(pool.clone()), "/api/admin/blogs", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blog_slugs_get_numeric_suffixes(pool: PgPool) {
    let (admin, token) = common::admin_with_token(&pool, "a@example.com", ROLE_ADMIN).await;
    let body = serde_json::json!({
        "title": "Hiring Tips for 2026!",
        "content": "Be clear about the role.",
        "is_published": true,
    });

    let first = create_post(&pool, &token, body.clone()).await;
    let second = create_post(&pool, &token, body.clone()).await;
    let third = create_post(&pool, &token, body).await;

    assert_eq!(first["slug"], "hiring-tips-for-2026");
    assert_eq!(second["slug"], "hiring-tips-for-2026-2");
    assert_eq!(third["slug"], "hiring-tips-for-2026-3");
    assert_eq!(first["author_id"], admin.id);
    assert!(first["published_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn drafts_are_not_public_until_published(pool: PgPool) {
    let (_admin, token) = common::admin_with_token(&pool, "a@example.com", ROLE_ADMIN).await;
    let post = create_post(
        &pool,
        &token,
        serde_json::json!({ "title": "Draft", "slug": "Custom Slug", "content": "WIP" }),
    )
    .await;
    assert_eq!(post["slug"], "custom-slug");
    assert!(post["published_at"].is_null());

    let response = get(common::build_test_app(pool.clone()), "/api/blogs/custom-slug").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/blogs/{}", post["id"]),
        &token,
        serde_json::json!({ "is_published": true, "title": "Renamed" }),
    )
    .await;
    let updated = body_json(response).await["data"].clone();
    assert!(updated["published_at"].is_string());
    // A new title alone keeps the slug.
    assert_eq!(updated["slug"], "custom-slug");

    let response = get(common::build_test_app(pool.clone()), "/api/blogs/custom-slug").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(common::build_test_app(pool), "/api/blogs").await;
    assert_eq!(body_json(response).await["total"], 1);
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn submitted_testimonials_need_approval(pool: PgPool) {
    let (_admin, token) = common::admin_with_token(&pool, "a@example.com", ROLE_ADMIN).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/testimonials",
        serde_json::json!({
            "author_name": "Sam",
            "content": "Found a job in a week",
            "rating": 6,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/testimonials",
        serde_json::json!({
            "author_name": "Sam",
            "content": "Found a job in a week",
            "rating": 5,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let testimonial = body_json(response).await["data"].clone();
    assert_eq!(testimonial["is_approved"], false);

    let response = get(common::build_test_app(pool.clone()), "/api/testimonials").await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 0);

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/testimonials/{}", testimonial["id"]),
        &token,
        serde_json::json!({ "is_approved": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(common::build_test_app(pool), "/api/testimonials").await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Staffing inquiries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn inquiry_is_public_and_notifies_admins(pool: PgPool) {
    let admin = common::create_admin(&pool, "a@example.com", ROLE_ADMIN).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/inquiries",
        serde_json::json!({
            "company_name": "Northwind",
            "contact_name": "Pat",
            "email": "pat@northwind.example",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "new");
    assert_eq!(json["data"]["positions_needed"], 1);
    assert_eq!(
        NotificationRepo::unread_count(&pool, ROLE_ADMIN, admin.id).await.unwrap(),
        1
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inquiry_rejects_bad_email_and_zero_positions(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/inquiries",
        serde_json::json!({ "company_name": "N", "contact_name": "P", "email": "nope" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        common::build_test_app(pool),
        "/api/inquiries",
        serde_json::json!({
            "company_name": "N",
            "contact_name": "P",
            "email": "p@n.example",
            "positions_needed": 0,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inquiry_status_accepts_only_known_values(pool: PgPool) {
    let (_admin, token) = common::admin_with_token(&pool, "a@example.com", ROLE_ADMIN).await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/inquiries",
        serde_json::json!({ "company_name": "N", "contact_name": "P", "email": "p@n.example" }),
    )
    .await;
    let id = body_json(response).await["data"]["id"].clone();
    let path = format!("/api/admin/inquiries/{id}");

    for status in ["contacted", "in_progress", "completed", "cancelled", "new"] {
        let response = put_json_auth(
            common::build_test_app(pool.clone()),
            &path,
            &token,
            serde_json::json!({ "status": status }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "status {status}");
    }

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &path,
        &token,
        serde_json::json!({ "status": "archived" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/admin/inquiries?status=new",
        &token,
    )
    .await;
    assert_eq!(body_json(response).await["total"], 1);
}

// ---------------------------------------------------------------------------
// Vacancies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn vacancy_publish_creates_job_once(pool: PgPool) {
    let (_admin, token) = common::admin_with_token(&pool, "a@example.com", ROLE_ADMIN).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/vacancies",
        serde_json::json!({
            "company_name": "Contoso",
            "contact_email": "hr@contoso.example",
            "title": "Night Porter",
            "location": "Bath",
            "description": "Overnight front desk.",
            "openings": 2,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let vacancy = body_json(response).await["data"].clone();
    assert_eq!(vacancy["status"], "pending");
    assert_eq!(vacancy["job_type"], "full_time");

    let path = format!("/api/admin/vacancies/{}/publish", vacancy["id"]);
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &path,
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["vacancy"]["status"], "approved");
    assert_eq!(json["data"]["job"]["status"], "published");
    assert_eq!(json["data"]["vacancy"]["job_id"], json["data"]["job"]["id"]);

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/jobs/{}", json["data"]["job"]["id"]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response =
        post_json_auth(common::build_test_app(pool), &path, &token, serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn vacancy_status_is_validated(pool: PgPool) {
    let (_admin, token) = common::admin_with_token(&pool, "a@example.com", ROLE_ADMIN).await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/vacancies",
        serde_json::json!({
            "company_name": "Contoso",
            "contact_email": "hr@contoso.example",
            "title": "Chef",
            "location": "Bath",
            "description": "Kitchen lead.",
        }),
    )
    .await;
    let id = body_json(response).await["data"]["id"].clone();
    let path = format!("/api/admin/vacancies/{id}/status");

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &path,
        &token,
        serde_json::json!({ "status": "maybe" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json_auth(
        common::build_test_app(pool),
        &path,
        &token,
        serde_json::json!({ "status": "rejected" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "rejected");
}
