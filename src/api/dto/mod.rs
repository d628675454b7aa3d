//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Wire field names follow the camelCase contract of
//! the public API.

pub mod generate;
pub mod health;
pub mod qr;
