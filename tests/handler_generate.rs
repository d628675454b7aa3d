mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use shortqr::api::handlers::{generate_handler, redirect_handler};
use sqlx::PgPool;

fn app(state: shortqr::AppState) -> Router {
    Router::new()
        .route("/api/generate", post(generate_handler))
        .route("/{slug}", get(redirect_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_generate_success(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .post("/api/generate")
        .json(&json!({
            "studentName": "Ahmad",
            "originalUrl": "https://drive.google.com/x"
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let slug = body["slug"].as_str().unwrap();

    assert_eq!(slug.len(), 6);
    assert!(
        slug.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    );
    assert_eq!(body["label"], "Ahmad");
    assert_eq!(body["originalUrl"], "https://drive.google.com/x");
    assert_eq!(
        body["shortUrl"],
        format!("{}/{}", common::TEST_BASE_URL, slug)
    );
    assert!(body["createdAt"].is_string());
}

#[sqlx::test]
async fn test_generate_missing_student_name(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .post("/api/generate")
        .json(&json!({ "originalUrl": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert!(body["error"].is_string());
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_generate_missing_original_url(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .post("/api/generate")
        .json(&json!({ "studentName": "Budi" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_generate_rejects_relative_url(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .post("/api/generate")
        .json(&json!({
            "studentName": "Citra",
            "originalUrl": "not-a-url"
        }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_generate_yields_distinct_slugs(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(app(state)).unwrap();

    let mut slugs = std::collections::HashSet::new();

    for i in 0..20 {
        let response = server
            .post("/api/generate")
            .json(&json!({
                "studentName": format!("Student {i}"),
                "originalUrl": format!("https://example.com/file/{i}")
            }))
            .await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        slugs.insert(body["slug"].as_str().unwrap().to_string());
    }

    assert_eq!(slugs.len(), 20);
    assert_eq!(common::count_links(&pool).await, 20);
}

#[sqlx::test]
async fn test_generate_then_redirect_round_trip(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .post("/api/generate")
        .json(&json!({
            "studentName": "Ahmad",
            "originalUrl": "https://drive.google.com/x"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let slug = body["slug"].as_str().unwrap();
    assert!(body["shortUrl"].as_str().unwrap().ends_with(slug));

    let redirect = server.get(&format!("/{slug}")).await;

    assert_eq!(redirect.status_code(), 307);
    assert_eq!(redirect.header("location"), "https://drive.google.com/x");
}
