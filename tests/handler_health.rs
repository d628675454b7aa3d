mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortqr::api::handlers::health_handler;
use sqlx::PgPool;

#[sqlx::test]
async fn test_health_ok(pool: PgPool) {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert!(body["version"].is_string());
}
