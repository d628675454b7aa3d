//! API route configuration.

use crate::api::handlers::{generate_handler, qr_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// API routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /generate` - Create a short link for a labelled URL
/// - `GET  /qr`       - Render a QR symbol with excavated logo area as SVG
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate_handler))
        .route("/qr", get(qr_handler))
}
