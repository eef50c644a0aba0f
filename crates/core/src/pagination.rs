//! Pagination defaults and clamping helpers for list endpoints.
//!
//! Pages are 1-indexed. Out-of-range values are clamped rather than rejected,
//! and a page beyond the last one is a valid empty result.

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum number of items per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a user-provided page number to be at least 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a user-provided page size to `1..=max`, defaulting when absent.
pub fn clamp_page_size(page_size: Option<i64>, default: i64, max: i64) -> i64 {
    page_size.unwrap_or(default).max(1).min(max)
}

/// Row offset for a 1-indexed page.
pub fn offset(page: i64, page_size: i64) -> i64 {
    (page - 1) * page_size
}
