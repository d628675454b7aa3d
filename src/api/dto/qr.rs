//! DTOs for the QR rendering endpoint.

use serde::Deserialize;

/// Pixel edge used when `size` is omitted.
pub const DEFAULT_SYMBOL_SIZE: u32 = 256;

/// Logo percentage used when `logo` is omitted.
pub const DEFAULT_LOGO_PERCENT: u32 = 25;

/// Query parameters for QR symbol rendering.
///
/// `size` and `logo` are validated against the composer's bounds
/// ([150, 500] pixels and [10, 40] percent); out-of-range values are
/// rejected, not clamped.
#[derive(Debug, Deserialize)]
pub struct QrParams {
    /// The string to encode, normally a short URL.
    pub content: String,

    /// Symbol edge length in pixels.
    pub size: Option<u32>,

    /// Logo overlay size as percent of the symbol edge.
    pub logo: Option<u32>,
}
