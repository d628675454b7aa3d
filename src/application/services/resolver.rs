//! Slug resolution service for the redirect path.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Resolves slugs back to their stored links.
///
/// Lookup is exact-match: no trimming, case-folding, or normalization is
/// applied to the slug. Since links are immutable, repeated resolution of
/// the same slug always yields the same result.
pub struct Resolver<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> Resolver<L> {
    /// Creates a new resolver.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Looks up a slug and returns the stored link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown slugs and
    /// [`AppError::Persistence`] on storage failure.
    pub async fn resolve(&self, slug: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn stored_link(slug: &str, url: &str) -> Link {
        Link::new(
            7,
            slug.to_string(),
            "Ahmad".to_string(),
            url.to_string(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_resolve_returns_original_url_unchanged() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_slug()
            .withf(|slug| slug == "abc123")
            .times(1)
            .returning(|slug| Ok(Some(stored_link(slug, "https://drive.google.com/x"))));

        let resolver = Resolver::new(Arc::new(mock_repo));
        let link = resolver.resolve("abc123").await.unwrap();

        assert_eq!(link.original_url, "https://drive.google.com/x");
    }

    #[tokio::test]
    async fn test_resolve_unknown_slug_is_not_found() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(None));

        let resolver = Resolver::new(Arc::new(mock_repo));
        let result = resolver.resolve("zzzzzz").await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "Link not found");
    }

    #[tokio::test]
    async fn test_resolve_is_exact_match() {
        let mut mock_repo = MockLinkRepository::new();

        // The padded slug must be passed through untouched; any trimming
        // would change the lookup key.
        mock_repo
            .expect_find_by_slug()
            .withf(|slug| slug == " abc123 ")
            .times(1)
            .returning(|_| Ok(None));

        let resolver = Resolver::new(Arc::new(mock_repo));
        assert!(resolver.resolve(" abc123 ").await.is_err());
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_slug()
            .times(3)
            .returning(|slug| Ok(Some(stored_link(slug, "https://example.com"))));

        let resolver = Resolver::new(Arc::new(mock_repo));

        let first = resolver.resolve("abc123").await.unwrap();
        let second = resolver.resolve("abc123").await.unwrap();
        let third = resolver.resolve("abc123").await.unwrap();

        assert_eq!(first.original_url, second.original_url);
        assert_eq!(second.original_url, third.original_url);
    }
}
