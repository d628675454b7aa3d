//! Shared application state injected into HTTP handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{LinkService, Resolver};
use crate::infrastructure::persistence::PgLinkRepository;

/// Application state shared across all request handlers.
///
/// Services are constructed once per process around an explicitly injected
/// repository; nothing here is request-scoped or mutable.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub resolver: Arc<Resolver<PgLinkRepository>>,
    /// Pool handle kept for the health check round-trip.
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Wires services around a connection pool and the configured base URL.
    pub fn new(pool: Arc<PgPool>, base_url: String) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));

        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone(), base_url)),
            resolver: Arc::new(Resolver::new(link_repository)),
            db: pool,
        }
    }
}
