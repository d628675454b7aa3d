//! Application error taxonomy and HTTP response mapping.
//!
//! Errors are serialized on the wire as a flat `{"error": "<message>"}` body.
//! [`AppError::DuplicateSlug`] is an internal condition recovered by retry in
//! [`crate::application::services::LinkService`]; it only reaches a client
//! when the retry ceiling is exhausted, reported as [`AppError::SlugExhaustion`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or out-of-range input. Reported as 400.
    #[error("{0}")]
    Validation(String),

    /// Unknown slug or resource. Reported as 404.
    #[error("{0}")]
    NotFound(String),

    /// A slug candidate already exists in the store. Recovered by retry;
    /// reported as 409 if it ever escapes.
    #[error("slug already exists: {0}")]
    DuplicateSlug(String),

    /// The retry ceiling for slug generation was exhausted. Reported as 500
    /// and logged as anomalous, since it implies near-saturation of the slug
    /// space or a generator defect.
    #[error("could not allocate a unique slug")]
    SlugExhaustion,

    /// The persistence collaborator failed. Reported as 500, never retried.
    #[error("storage failure")]
    Persistence(#[source] sqlx::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateSlug(_) => StatusCode::CONFLICT,
            AppError::SlugExhaustion | AppError::Persistence(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Maps a database error onto the taxonomy.
///
/// A unique-constraint violation on the slug key becomes [`AppError::DuplicateSlug`]
/// so the caller can retry with a fresh candidate; everything else is a
/// [`AppError::Persistence`] failure.
pub fn map_sqlx_error(e: sqlx::Error, slug: &str) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::DuplicateSlug(slug.to_string());
        }
    }

    AppError::Persistence(e)
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}
