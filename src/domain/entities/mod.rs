//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A persisted slug-to-URL mapping with its human label
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewLink`] carries the caller-supplied fields, the database assigns the
//! rest at insert time.

pub mod link;

pub use link::{Link, NewLink};
