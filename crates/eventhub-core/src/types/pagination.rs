//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_PAGE_LIMIT: u64 = 9;
/// Maximum page size.
pub const MAX_PAGE_LIMIT: u64 = 100;
/// Highest page number; keeps the offset within a signed 64-bit range.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_PAGE_LIMIT;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl PageRequest {
    /// Create a page request, clamping out-of-range values.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.clamp(1, MAX_PAGE),
            limit: limit.clamp(1, MAX_PAGE_LIMIT),
        }
    }

    /// Number of items to skip.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

/// Position of a page within the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
    /// Total number of items across all pages.
    pub total: u64,
    /// Whether a later page exists.
    pub has_more: bool,
}

/// A page of items together with its position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Page position.
    pub pagination: PageMeta,
}

impl<T> PageResponse<T> {
    /// Build a response for `request` given the total item count.
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            pagination: PageMeta {
                page: request.page,
                limit: request.limit,
                total,
                has_more: request.page.saturating_mul(request.limit) < total,
            },
        }
    }

    /// Transform the items, keeping the page position.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let req = PageRequest::default();
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, 9);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_new_clamps() {
        let req = PageRequest::new(0, 10_000);
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, MAX_PAGE_LIMIT);
    }

    #[test]
    fn test_offset_fits_signed_range() {
        let req = PageRequest::new(u64::MAX, MAX_PAGE_LIMIT);
        assert_eq!(req.page, MAX_PAGE);
        assert!(i64::try_from(req.offset()).is_ok());
    }

    #[test]
    fn test_has_more() {
        let first = PageResponse::new(vec![(); 9], PageRequest::new(1, 9), 10);
        assert!(first.pagination.has_more);

        let last = PageResponse::new(vec![()], PageRequest::new(2, 9), 10);
        assert!(!last.pagination.has_more);
        assert_eq!(PageRequest::new(2, 9).offset(), 9);
    }

    #[test]
    fn test_exact_fit_has_no_more() {
        let page = PageResponse::new(vec![(); 9], PageRequest::new(1, 9), 9);
        assert!(!page.pagination.has_more);
    }
}
