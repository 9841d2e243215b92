//! Pagination types for list endpoints.
//!
//! List endpoints on the backend accept `page` and `limit` query parameters
//! (1-indexed pages) and answer with a `data` array plus a `meta` object.
//!
//! # Example
//!
//! ```ignore
//! use mindmeter_core::pagination::{PageParams, Paginated};
//!
//! let params = PageParams::new(2, 20);
//! let page: Paginated<AdminUser> = client
//!     .get_json_with_query("/api/admin/users", &params.to_query())
//!     .await?;
//! ```

use serde::{Deserialize, Serialize};

/// Query parameters for page-based pagination.
///
/// # Limits
///
/// - `limit` is clamped to the range [1, 100]
/// - `page` is clamped to a minimum of 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageParams {
    /// Page number (1-indexed, default: 1)
    pub page: i64,
    /// Items per page (1-100, default: 10)
    pub limit: i64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl PageParams {
    /// Creates page parameters, clamping out-of-range values.
    #[must_use]
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// Returns the effective page number, clamped to a minimum of 1.
    #[must_use]
    pub fn page(&self) -> i64 {
        self.page.max(1)
    }

    /// Returns the effective limit, clamped to [1, 100].
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, 100)
    }

    /// Renders the parameters as query pairs for the request URL.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page().to_string()),
            ("limit", self.limit().to_string()),
        ]
    }
}

/// Metadata returned alongside a page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total number of items across all pages
    pub total: i64,
    /// Current page number (1-indexed)
    pub page: i64,
    /// Items per page
    pub limit: i64,
    /// Whether there are more items after this page
    #[serde(default)]
    pub has_more: bool,
}

/// A page of results with its metadata, as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_params_default() {
        let params = PageParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn test_page_params_to_query() {
        let params = PageParams::new(3, 25);
        assert_eq!(
            params.to_query(),
            vec![("page", "3".to_string()), ("limit", "25".to_string())]
        );
    }

    #[test]
    fn test_page_params_limit_boundary_cases() {
        let test_cases = vec![(1, 1), (50, 50), (100, 100), (101, 100), (0, 1), (-1, 1)];

        for (input, expected) in test_cases {
            let params = PageParams::new(1, input);
            assert_eq!(params.limit(), expected);
        }
    }

    #[test]
    fn test_page_params_page_clamped() {
        let params = PageParams::new(0, 10);
        assert_eq!(params.page(), 1);

        let params = PageParams::new(-5, 10);
        assert_eq!(params.page(), 1);
    }

    #[test]
    fn test_page_meta_deserialize_camel_case() {
        let json = r#"{"total":100,"page":3,"limit":10,"hasMore":true}"#;
        let meta: PageMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.total, 100);
        assert_eq!(meta.page, 3);
        assert!(meta.has_more);
    }

    #[test]
    fn test_page_meta_has_more_defaults_false() {
        let json = r#"{"total":5,"page":1,"limit":10}"#;
        let meta: PageMeta = serde_json::from_str(json).unwrap();
        assert!(!meta.has_more);
    }

    #[test]
    fn test_paginated_deserialize() {
        let json = r#"{"data":["a","b"],"meta":{"total":2,"page":1,"limit":10,"hasMore":false}}"#;
        let page: Paginated<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.meta.total, 2);
    }
}
