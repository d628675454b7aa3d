mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortqr::api::handlers::redirect_handler;
use sqlx::PgPool;

fn redirect_app(state: shortqr::AppState) -> Router {
    Router::new()
        .route("/{slug}", get(redirect_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(redirect_app(state)).unwrap();

    common::create_test_link(&pool, "red123", "Ahmad", "https://example.com/target").await;

    let response = server.get("/red123").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_unknown_slug_on_empty_store(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(redirect_app(state)).unwrap();

    let response = server.get("/zzzzzz").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Link not found");
}

#[sqlx::test]
async fn test_redirect_malformed_slug(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(redirect_app(state)).unwrap();

    // Wrong length and wrong alphabet can never match a stored slug.
    server.get("/toolongslug").await.assert_status_not_found();
    server.get("/AB1234").await.assert_status_not_found();
}

#[sqlx::test]
async fn test_redirect_preserves_url_bytes(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(redirect_app(state)).unwrap();

    let raw = "https://EXAMPLE.com:443/Path?Q=1&r=%20x";
    common::create_test_link(&pool, "byte01", "Budi", raw).await;

    let response = server.get("/byte01").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), raw);
}

#[sqlx::test]
async fn test_redirect_is_idempotent(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(redirect_app(state)).unwrap();

    common::create_test_link(&pool, "same01", "Citra", "https://example.com/doc").await;

    for _ in 0..3 {
        let response = server.get("/same01").await;
        assert_eq!(response.status_code(), 307);
        assert_eq!(response.header("location"), "https://example.com/doc");
    }
}
