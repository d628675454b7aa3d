//! QR symbol composition for branded short links.
//!
//! [`composer`] turns a short URL plus caller-chosen dimensions into a render
//! plan: an encoded module matrix with the centered logo area excavated, and
//! the overlay's pixel geometry. [`svg`] renders a plan into an SVG document;
//! rasterization to PNG/PDF is left to clients.

pub mod composer;
pub mod svg;

pub use composer::{LogoBox, QrRenderPlan, compose};
