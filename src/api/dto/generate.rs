//! DTOs for the short link generation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short link for a labelled URL.
///
/// Fields are optional at the serde level so that missing keys surface as a
/// 400 validation error rather than a deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Human label for the recipient of the link.
    #[validate(
        required(message = "studentName is required"),
        length(min = 1, message = "studentName must not be empty")
    )]
    pub student_name: Option<String>,

    /// The original URL to shorten (must be an absolute URL).
    #[validate(
        required(message = "originalUrl is required"),
        length(min = 1, message = "originalUrl must not be empty")
    )]
    pub original_url: Option<String>,
}

/// Response with the created link and its composed short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub short_url: String,
    pub slug: String,
    pub label: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}
