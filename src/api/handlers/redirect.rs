//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::slug::is_slug_shaped;

/// Redirects a slug to its original URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Behavior
///
/// Lookup is exact-match; the slug is passed to the store untouched. Paths
/// that cannot be a generated slug (wrong length or alphabet) are answered
/// 404 without touching the store, since every stored slug is 6 characters
/// of `[a-z0-9]`.
///
/// The redirect target is the stored URL byte-for-byte; it is never
/// normalized, interpreted, or followed server-side.
///
/// # Errors
///
/// Returns 404 Not Found with `{"error": "Link not found"}` when the slug
/// does not exist.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    if !is_slug_shaped(&slug) {
        debug!(slug, "rejecting malformed slug without store lookup");
        return Err(AppError::not_found("Link not found"));
    }

    let link = state.resolver.resolve(&slug).await?;

    Ok(Redirect::temporary(&link.original_url))
}
