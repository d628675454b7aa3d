//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod generate;
pub mod health;
pub mod qr;
pub mod redirect;

pub use generate::generate_handler;
pub use health::health_handler;
pub use qr::qr_handler;
pub use redirect::redirect_handler;
