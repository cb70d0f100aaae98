//! Shared foundation for the cinelog workspace.
//!
//! Zero internal dependencies so it can be used by both the repository
//! layer and the API crate: the error taxonomy, database type aliases,
//! pagination math, rating bounds, and the poster placeholder.

pub mod error;
pub mod media;
pub mod pagination;
pub mod rating;
pub mod types;
