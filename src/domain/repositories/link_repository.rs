//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the durable slug-to-URL store.
///
/// The store is the sole enforcer of slug uniqueness (via its key
/// constraint); no application-level locking exists on top of it. Records
/// are immutable, so the contract is intentionally narrow: a single-record
/// insert and an exact-match lookup.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new link as a single atomic insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateSlug`] if the slug already exists.
    /// Returns [`AppError::Persistence`] on underlying storage failure.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its slug. Exact match, no normalization.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage failure.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError>;
}
