//! Business logic services for the application layer.

pub mod link_service;
pub mod resolver;

pub use link_service::{CreatedLink, LinkService};
pub use resolver::Resolver;
