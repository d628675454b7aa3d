#![allow(dead_code)]

use shortqr::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

/// Base URL injected into test states; short URLs compose against it.
pub const TEST_BASE_URL: &str = "http://localhost:3000";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), TEST_BASE_URL.to_string())
}

pub async fn create_test_link(pool: &PgPool, slug: &str, label: &str, url: &str) {
    sqlx::query("INSERT INTO links (slug, label, original_url) VALUES ($1, $2, $3)")
        .bind(slug)
        .bind(label)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}
