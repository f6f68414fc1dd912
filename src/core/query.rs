//! Query parameters and pagination utilities

use crate::core::error::DashError;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Query parameters for page-windowed listing
///
/// Values are signed so that a negative index coming from a URL reaches
/// validation instead of failing deserialization with an opaque message.
///
/// # Example
/// ```rust,ignore
/// // In handler:
/// pub async fn list_payments(
///     Query(params): Query<PageQuery>,
/// ) -> Result<Json<Page<Payment>>, DashError> {
///     let request = params.validate()?;
///     // ...
/// }
///
/// // Usage:
/// GET /payments?pageIndex=2&pageSize=50
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageQuery {
    /// Zero-based page index
    pub page_index: i64,

    /// Number of records per page
    pub page_size: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_index: DEFAULT_PAGE_INDEX,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Initial table state of the dashboard
pub const DEFAULT_PAGE_INDEX: i64 = 0;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

impl PageQuery {
    pub fn validate(&self) -> Result<PageRequest, DashError> {
        PageRequest::try_new(self.page_index, self.page_size)
    }
}

/// A validated page address
///
/// Invalid input is rejected, never clamped: a page size of zero or a
/// negative index produces [`ValidationError::InvalidArgument`](crate::core::ValidationError).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_index: usize,
    page_size: usize,
}

impl PageRequest {
    pub fn new(page_index: usize, page_size: usize) -> Result<Self, DashError> {
        if page_size == 0 {
            return Err(DashError::invalid_argument(
                "page_size",
                "must be greater than zero",
            ));
        }

        Ok(Self {
            page_index,
            page_size,
        })
    }

    /// Validate signed input, as received from an untyped boundary
    pub fn try_new(page_index: i64, page_size: i64) -> Result<Self, DashError> {
        let page_index = usize::try_from(page_index).map_err(|_| {
            DashError::invalid_argument(
                "page_index",
                format!("must not be negative, got {page_index}"),
            )
        })?;

        if page_size <= 0 {
            return Err(DashError::invalid_argument(
                "page_size",
                format!("must be greater than zero, got {page_size}"),
            ));
        }
        let page_size = usize::try_from(page_size).map_err(|_| {
            DashError::invalid_argument("page_size", format!("{page_size} is out of range"))
        })?;

        Self::new(page_index, page_size)
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index range of this page within a collection of `total` records
    ///
    /// Pages past the end yield an empty range anchored at `total`; the last
    /// page may be partial.
    pub fn window(&self, total: usize) -> Range<usize> {
        let start = self.page_index.saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);
        start..end
    }

    /// Number of pages needed to cover `total` records
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }
}

/// One page of records with pagination metadata
///
/// Serializes as `{"data": [...], "pageCount": n, "total": n}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records in this page, in collection order
    pub data: Vec<T>,

    /// Total number of pages for the requested page size
    pub page_count: usize,

    /// Total number of records in the backing collection
    pub total: usize,
}

impl<T: Clone> Page<T> {
    /// Cut the page addressed by `request` out of `records`
    pub fn from_slice(records: &[T], request: PageRequest) -> Self {
        let total = records.len();
        Self {
            data: records[request.window(total)].to_vec(),
            page_count: request.page_count(total),
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ValidationError;

    #[test]
    fn test_page_query_defaults() {
        let query = PageQuery::default();
        let request = query.validate().unwrap();
        assert_eq!(request.page_index(), 0);
        assert_eq!(request.page_size(), 10);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = PageRequest::new(0, 0).unwrap_err();
        assert!(matches!(
            err,
            DashError::Validation(ValidationError::InvalidArgument { ref argument, .. })
                if argument == "page_size"
        ));
    }

    #[test]
    fn test_negative_inputs_rejected() {
        assert!(PageRequest::try_new(-1, 10).is_err());
        assert!(PageRequest::try_new(0, -5).is_err());
        assert!(PageRequest::try_new(0, 0).is_err());
        assert!(PageRequest::try_new(3, 7).is_ok());
    }

    #[test]
    fn test_window_partial_and_past_end() {
        let request = PageRequest::new(2, 10).unwrap();
        assert_eq!(request.window(25), 20..25);
        assert_eq!(request.window(20), 20..20);
        assert_eq!(request.window(0), 0..0);
    }

    #[test]
    fn test_window_does_not_overflow() {
        let request = PageRequest::new(usize::MAX, usize::MAX).unwrap();
        assert!(request.window(500).is_empty());
    }

    #[test]
    fn test_page_count() {
        let request = PageRequest::new(0, 20).unwrap();
        assert_eq!(request.page_count(145), 8);
        assert_eq!(request.page_count(140), 7);
        assert_eq!(request.page_count(0), 0);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = Page {
            data: vec![1, 2, 3],
            page_count: 4,
            total: 12,
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json, serde_json::json!({ "data": [1, 2, 3], "pageCount": 4, "total": 12 }));
    }
}
