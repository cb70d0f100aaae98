//! Pagination defaults and page math for catalog listings.
//!
//! Pages are 1-indexed on the wire. Limits are clamped so a client cannot
//! request an unbounded page.

use serde::Serialize;

/// Default number of catalog results per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 12;

/// Maximum number of catalog results per page.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp a client-supplied page number to 1 or greater.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a client-supplied page size to `1..=MAX_PAGE_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT)
}

/// Row offset for a 1-indexed page.
pub fn offset(page: i64, limit: i64) -> i64 {
    (page - 1) * limit
}

/// `ceil(total / limit)`; zero when there are no rows.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

/// Pagination metadata returned alongside every catalog page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl PageMeta {
    /// Build metadata from the filtered total and the clamped page/limit.
    pub fn new(total: i64, page: i64, limit: i64) -> Self {
        Self {
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_page_floors_at_one() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-3)), 1);
        assert_eq!(clamp_page(Some(7)), 7);
    }

    #[test]
    fn test_clamp_limit_bounds() {
        assert_eq!(clamp_limit(None), DEFAULT_PAGE_LIMIT);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(5000)), MAX_PAGE_LIMIT);
        assert_eq!(clamp_limit(Some(25)), 25);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        // 5 matching rows at 2 per page -> 3 pages.
        assert_eq!(total_pages(5, 2), 3);
        assert_eq!(total_pages(4, 2), 2);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(0, 12), 0);
    }

    #[test]
    fn test_offset_is_zero_based() {
        assert_eq!(offset(1, 12), 0);
        assert_eq!(offset(3, 2), 4);
    }
}
