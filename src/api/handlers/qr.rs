//! Handler for QR symbol rendering.

use axum::{
    extract::Query,
    http::header,
    response::{IntoResponse, Response},
};

use crate::api::dto::qr::{DEFAULT_LOGO_PERCENT, DEFAULT_SYMBOL_SIZE, QrParams};
use crate::error::AppError;
use crate::qr;

/// Renders a QR symbol with an excavated logo area as SVG.
///
/// # Endpoint
///
/// `GET /api/qr?content=<url>&size=<px>&logo=<percent>`
///
/// The symbol is always encoded at error-correction level H because the
/// logo area is excavated from the matrix. The response leaves the centered
/// logo box blank; clients overlay their branding mark there.
///
/// # Errors
///
/// Returns 400 Bad Request when `size` is outside [150, 500], `logo` is
/// outside [10, 40], or the content does not fit a QR symbol.
pub async fn qr_handler(Query(params): Query<QrParams>) -> Result<Response, AppError> {
    let size = params.size.unwrap_or(DEFAULT_SYMBOL_SIZE);
    let logo = params.logo.unwrap_or(DEFAULT_LOGO_PERCENT);

    let plan = qr::compose(&params.content, size, logo)?;
    let svg = qr::svg::render(&plan);

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response())
}
