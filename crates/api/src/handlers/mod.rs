//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `cinelog_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod movie;
pub mod review;
pub mod user;
