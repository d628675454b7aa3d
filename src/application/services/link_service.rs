//! Link creation service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::slug::generate_slug;
use url::Url;

/// Maximum slug candidates tried before giving up.
///
/// Exhausting this ceiling implies near-saturation of the 36^6 slug space or
/// a generator defect; either way retrying further would not help.
const MAX_ATTEMPTS: usize = 5;

/// A successfully created link together with its composed short URL.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub link: Link,
    pub short_url: String,
}

/// Service for creating short links.
///
/// Validates input, generates slug candidates, and retries insertion on
/// collision. The store's unique key is the only uniqueness authority; this
/// service just reacts to its verdict.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    base_url: String,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `base_url` is the externally visible prefix short URLs are composed
    /// from, e.g. `https://s.example.com`.
    pub fn new(link_repository: Arc<L>, base_url: String) -> Self {
        Self {
            link_repository,
            base_url,
        }
    }

    /// Creates a short link for `original_url` labelled with `label`.
    ///
    /// # Validation
    ///
    /// - `label` must be non-empty (whitespace-only counts as empty)
    /// - `original_url` must be non-empty and parse as an absolute URL; it is
    ///   otherwise stored byte-for-byte, never normalized
    ///
    /// # Collision handling
    ///
    /// Inserts a fresh random slug and retries on [`AppError::DuplicateSlug`],
    /// up to 5 attempts. [`AppError::Persistence`] is never retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on bad input,
    /// [`AppError::SlugExhaustion`] when the retry ceiling is exhausted, and
    /// [`AppError::Persistence`] on storage failure.
    pub async fn create_link(
        &self,
        label: String,
        original_url: String,
    ) -> Result<CreatedLink, AppError> {
        if label.trim().is_empty() {
            return Err(AppError::validation("label must not be empty"));
        }

        if original_url.trim().is_empty() {
            return Err(AppError::validation("originalUrl must not be empty"));
        }

        Url::parse(&original_url)
            .map_err(|e| AppError::validation(format!("originalUrl is not an absolute URL: {e}")))?;

        for _ in 0..MAX_ATTEMPTS {
            let new_link = NewLink {
                slug: generate_slug(),
                label: label.clone(),
                original_url: original_url.clone(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    let short_url = self.short_url(&link.slug);
                    return Ok(CreatedLink { link, short_url });
                }
                Err(AppError::DuplicateSlug(slug)) => {
                    tracing::debug!(slug, "slug collision, retrying with a fresh candidate");
                }
                Err(other) => return Err(other),
            }
        }

        tracing::warn!(
            attempts = MAX_ATTEMPTS,
            "slug generation exhausted its retry ceiling"
        );
        Err(AppError::SlugExhaustion)
    }

    /// Composes the full short URL for a slug.
    pub fn short_url(&self, slug: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), slug)
    }
}
