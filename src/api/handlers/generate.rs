//! Handler for the short link generation endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::generate::{GenerateRequest, GenerateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a labelled URL.
///
/// # Endpoint
///
/// `POST /api/generate`
///
/// # Request Body
///
/// ```json
/// {
///   "studentName": "Ahmad",
///   "originalUrl": "https://drive.google.com/x"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shortUrl": "http://localhost:3000/abc123",
///   "slug": "abc123",
///   "label": "Ahmad",
///   "originalUrl": "https://drive.google.com/x",
///   "createdAt": "2026-08-30T10:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when a field is missing, empty, or not an
/// absolute URL. Returns 500 on persistence failure or slug exhaustion.
pub async fn generate_handler(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    payload.validate()?;

    let label = payload.student_name.unwrap_or_default();
    let original_url = payload.original_url.unwrap_or_default();

    let created = state.link_service.create_link(label, original_url).await?;

    Ok(Json(GenerateResponse {
        short_url: created.short_url,
        slug: created.link.slug,
        label: created.link.label,
        original_url: created.link.original_url,
        created_at: created.link.created_at,
    }))
}
