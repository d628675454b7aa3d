//! QR composer: error-correction choice and logo overlay geometry.

use qrcode::{EcLevel, QrCode};

use crate::error::AppError;

/// Caller-facing bounds for the rendered symbol edge, in pixels.
pub const MIN_SYMBOL_SIZE: u32 = 150;
pub const MAX_SYMBOL_SIZE: u32 = 500;

/// Caller-facing bounds for the logo overlay, as percent of the symbol edge.
///
/// 40% is the permitted ceiling and is accepted as a documented risk: level H
/// tolerates roughly 30% symbol damage, so overlays near the ceiling may not
/// scan for long content.
pub const MIN_LOGO_PERCENT: u32 = 10;
pub const MAX_LOGO_PERCENT: u32 = 40;

/// Pixel geometry of the centered square logo overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoBox {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

/// A renderable QR symbol with its overlay geometry.
///
/// `modules` is the encoded matrix in row-major order (`true` = dark), with
/// every module intersecting the logo box already excavated. Consumers draw
/// the dark modules, leave the logo box blank, and place the branding mark
/// inside it.
#[derive(Debug, Clone)]
pub struct QrRenderPlan {
    pub modules: Vec<bool>,
    pub width: usize,
    pub symbol_size: u32,
    pub logo_box: LogoBox,
    pub ec_level: EcLevel,
}

impl QrRenderPlan {
    /// Returns true if the module at `(col, row)` is dark.
    pub fn is_dark(&self, col: usize, row: usize) -> bool {
        self.modules[row * self.width + col]
    }

    /// Edge length of one module in pixels.
    pub fn module_pitch(&self) -> f64 {
        f64::from(self.symbol_size) / self.width as f64
    }
}

/// Composes a QR render plan for `content`.
///
/// Error correction is fixed at level H: the overlay area is excavated (left
/// unencoded), so the symbol must spend its damage-tolerance budget on it.
/// The overlay is a square of `symbol_size * logo_area_percent / 100` pixels
/// centered at the symbol's geometric center; any module whose cell
/// intersects that square is cleared from the matrix rather than overdrawn.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when `symbol_size` is outside
/// [150, 500], `logo_area_percent` is outside [10, 40] (out-of-range values
/// are rejected, never clamped), or `content` does not fit a version-40
/// symbol at level H.
pub fn compose(
    content: &str,
    symbol_size: u32,
    logo_area_percent: u32,
) -> Result<QrRenderPlan, AppError> {
    if !(MIN_SYMBOL_SIZE..=MAX_SYMBOL_SIZE).contains(&symbol_size) {
        return Err(AppError::validation(format!(
            "symbol size must be between {MIN_SYMBOL_SIZE} and {MAX_SYMBOL_SIZE} pixels"
        )));
    }

    if !(MIN_LOGO_PERCENT..=MAX_LOGO_PERCENT).contains(&logo_area_percent) {
        return Err(AppError::validation(format!(
            "logo area must be between {MIN_LOGO_PERCENT} and {MAX_LOGO_PERCENT} percent"
        )));
    }

    let code = QrCode::with_error_correction_level(content, EcLevel::H)
        .map_err(|e| AppError::validation(format!("content cannot be QR-encoded: {e:?}")))?;

    let width = code.width();
    let mut modules: Vec<bool> = code
        .to_colors()
        .into_iter()
        .map(|c| c == qrcode::Color::Dark)
        .collect();

    let logo_size = symbol_size * logo_area_percent / 100;
    let logo_origin = (symbol_size - logo_size) / 2;
    let logo_box = LogoBox {
        x: logo_origin,
        y: logo_origin,
        size: logo_size,
    };

    excavate(&mut modules, width, symbol_size, logo_box);

    Ok(QrRenderPlan {
        modules,
        width,
        symbol_size,
        logo_box,
        ec_level: EcLevel::H,
    })
}

/// Clears every module whose pixel cell intersects the logo box.
///
/// Works in pixel space so partial overlaps at the box edges are excavated
/// too; a half-covered module is as unreadable as a fully covered one.
fn excavate(modules: &mut [bool], width: usize, symbol_size: u32, logo_box: LogoBox) {
    let pitch = f64::from(symbol_size) / width as f64;
    let left = f64::from(logo_box.x);
    let top = f64::from(logo_box.y);
    let right = left + f64::from(logo_box.size);
    let bottom = top + f64::from(logo_box.size);

    for row in 0..width {
        let cell_top = row as f64 * pitch;
        let cell_bottom = cell_top + pitch;
        if cell_bottom <= top || cell_top >= bottom {
            continue;
        }

        for col in 0..width {
            let cell_left = col as f64 * pitch;
            let cell_right = cell_left + pitch;
            if cell_right <= left || cell_left >= right {
                continue;
            }

            modules[row * width + col] = false;
        }
    }
}
