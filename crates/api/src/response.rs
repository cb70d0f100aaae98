//! Shared response envelope types for API handlers.
//!
//! Paginated collection endpoints use a `{ "data": [...], "meta": {...} }`
//! envelope. Use [`PagedResponse`] instead of ad-hoc
//! `serde_json::json!({ "data": ... })` to get compile-time type safety and
//! consistent serialization.

use cinelog_core::pagination::PageMeta;
use serde::Serialize;

/// Standard `{ "data": [...], "meta": {...} }` envelope for paginated lists.
///
/// # Example
///
/// ```ignore
/// Ok(Json(PagedResponse { data: movies, meta: PageMeta::new(total, page, limit) }))
/// ```
#[derive(Debug, Serialize)]
pub struct PagedResponse<T: Serialize> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}
