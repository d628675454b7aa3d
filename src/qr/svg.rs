//! SVG rendering of a [`QrRenderPlan`].
//!
//! The plan's dark modules become `<rect>` elements in pixel space; the
//! excavated logo box is simply left blank so a client can place the
//! branding mark there (as an `<image>` overlay or at print time).

use std::fmt::Write as _;

use crate::qr::composer::QrRenderPlan;

/// Renders a plan into a standalone SVG document.
pub fn render(plan: &QrRenderPlan) -> String {
    let size = plan.symbol_size;
    let pitch = plan.module_pitch();

    // Rough capacity guess: one rect element per dark module.
    let mut svg = String::with_capacity(plan.modules.len() * 48);

    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
    );
    let _ = write!(
        svg,
        r##"<rect width="{size}" height="{size}" fill="#ffffff"/>"##,
    );

    for row in 0..plan.width {
        for col in 0..plan.width {
            if !plan.is_dark(col, row) {
                continue;
            }

            let x = col as f64 * pitch;
            let y = row as f64 * pitch;
            let _ = write!(
                svg,
                r##"<rect x="{x:.2}" y="{y:.2}" width="{pitch:.2}" height="{pitch:.2}" fill="#000000"/>"##,
            );
        }
    }

    svg.push_str("</svg>");
    svg
}
