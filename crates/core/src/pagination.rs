//! Page-number pagination.
//!
//! A [`Pagination`] value is created per request from the raw `page` /
//! `per_page` query parameters, sanitized on construction, and populated
//! exactly once with the total row count reported by the count query.

use serde::Serialize;

/// Page size used when the caller omits `per_page` or passes a value below 1.
pub const DEFAULT_PER_PAGE: i64 = 50;

/// Upper bound for `per_page`.
pub const MAX_PER_PAGE: i64 = 100;

/// Normalize raw page inputs.
///
/// `page` below 1 becomes 1. `per_page` below 1 becomes [`DEFAULT_PER_PAGE`],
/// anything above [`MAX_PER_PAGE`] is clamped down to it.
pub fn sanitize(page: i64, per_page: i64) -> (i64, i64) {
    let page = if page < 1 { 1 } else { page };
    let per_page = if per_page < 1 {
        DEFAULT_PER_PAGE
    } else {
        per_page.min(MAX_PER_PAGE)
    };
    (page, per_page)
}

/// Number of rows to skip before the first row of `page`.
pub fn offset(page: i64, per_page: i64) -> i64 {
    per_page.saturating_mul(page - 1)
}

/// Pagination state for a single list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
    pub total_items: i64,
    pub total_pages: i64,
    /// `0` when there is no further page.
    pub next_page: i64,
}

impl Pagination {
    /// Build a sanitized pagination request. Totals start at zero.
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Self {
        let (page, per_page) = sanitize(page.unwrap_or(1), per_page.unwrap_or(DEFAULT_PER_PAGE));
        Self {
            page,
            per_page,
            total_items: 0,
            total_pages: 0,
            next_page: 0,
        }
    }

    pub fn offset(&self) -> i64 {
        offset(self.page, self.per_page)
    }

    /// Whether the requested page starts past the end of `total` rows.
    ///
    /// Such a page is empty and its pagination metadata is withheld.
    pub fn is_beyond(&self, total: i64) -> bool {
        self.offset() > total
    }

    /// Fill in the totals derived from the matching row count.
    ///
    /// `next_page` wraps to 0 once `page == total_pages`.
    pub fn populate(&mut self, total: i64) {
        let total = total.max(0);
        self.total_items = total;
        self.total_pages = total / self.per_page + i64::from(total % self.per_page != 0);
        self.next_page = self.page.saturating_add(1) % (self.total_pages + 1);
    }

    /// Whether pagination headers should be emitted for this page.
    pub fn has_next_page(&self) -> bool {
        self.next_page > 0
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn populated(page: i64, per_page: i64, total: i64) -> Pagination {
        let mut p = Pagination::new(Some(page), Some(per_page));
        p.populate(total);
        p
    }

    // -- sanitize ------------------------------------------------------------

    #[test]
    fn sanitize_floors_page_at_one() {
        assert_eq!(sanitize(0, 10), (1, 10));
        assert_eq!(sanitize(-7, 10), (1, 10));
    }

    #[test]
    fn sanitize_defaults_small_page_size() {
        assert_eq!(sanitize(1, 0), (1, DEFAULT_PER_PAGE));
        assert_eq!(sanitize(1, -3), (1, DEFAULT_PER_PAGE));
    }

    #[test]
    fn sanitize_clamps_large_page_size() {
        assert_eq!(sanitize(2, 101), (2, MAX_PER_PAGE));
        assert_eq!(sanitize(2, 100), (2, 100));
    }

    #[test]
    fn new_uses_defaults_when_absent() {
        let p = Pagination::new(None, None);
        assert_eq!(p.page, 1);
        assert_eq!(p.per_page, DEFAULT_PER_PAGE);
        assert_eq!(p.offset(), 0);
    }

    // -- offset --------------------------------------------------------------

    #[test]
    fn offset_is_per_page_times_previous_pages() {
        assert_eq!(offset(1, 10), 0);
        assert_eq!(offset(2, 10), 10);
        assert_eq!(offset(4, 25), 75);
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        assert_eq!(offset(i64::MAX, MAX_PER_PAGE), i64::MAX);
    }

    // -- populate ------------------------------------------------------------

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(populated(1, 10, 25).total_pages, 3);
        assert_eq!(populated(1, 10, 30).total_pages, 3);
        assert_eq!(populated(1, 10, 31).total_pages, 4);
    }

    #[test]
    fn next_page_advances_before_last_page() {
        let p = populated(1, 10, 25);
        assert_eq!(p.next_page, 2);
        assert!(p.has_next_page());
    }

    #[test]
    fn next_page_wraps_to_zero_on_last_page() {
        let p = populated(3, 10, 25);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.next_page, 0);
        assert!(!p.has_next_page());
    }

    #[test]
    fn next_page_is_zero_without_rows() {
        let p = populated(1, 10, 0);
        assert_eq!(p.total_pages, 0);
        assert_eq!(p.next_page, 0);
    }

    #[test]
    fn scenario_five_rows_two_per_page() {
        let p = populated(1, 2, 5);
        assert_eq!(p.total_items, 5);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.next_page, 2);
    }

    // -- is_beyond -----------------------------------------------------------

    #[test]
    fn page_past_total_is_beyond() {
        let p = Pagination::new(Some(2), Some(10));
        assert!(p.is_beyond(5));
    }

    #[test]
    fn offset_equal_to_total_is_not_beyond() {
        let p = Pagination::new(Some(2), Some(10));
        assert!(!p.is_beyond(10));
    }
}
