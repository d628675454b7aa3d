//! Utility functions shared across the application.
//!
//! - [`slug`] - Short slug generation and shape checking

pub mod slug;
