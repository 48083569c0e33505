//! Pagination parameters for listing review comments.
//!
//! The client never walks pages itself. Callers choose a page and page size,
//! and the values are forwarded to GitHub only when they are set. A zero value
//! is treated the same as an absent one so GitHub applies its own default.

/// Optional page controls for the review comment listing.
///
/// # Example
///
/// ```
/// use review_comments::github::pagination::ListReviewCommentsParams;
///
/// let params = ListReviewCommentsParams::new().with_page(3).with_per_page(0);
/// assert_eq!(params.query_pairs(), vec![("page", "3".to_owned())]);
/// assert_eq!(params.query_string().as_deref(), Some("page=3"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListReviewCommentsParams {
    /// Page number to fetch (1-based). Left to GitHub when unset or zero.
    pub page: Option<u32>,
    /// Items per page. Left to GitHub when unset or zero.
    pub per_page: Option<u32>,
}

impl ListReviewCommentsParams {
    /// Creates parameters that let GitHub choose every default.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page: None,
            per_page: None,
        }
    }

    /// Sets the page number.
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Returns the query parameters that should be sent, in wire order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let page = self
            .page
            .filter(|value| *value != 0)
            .map(|value| ("page", value.to_string()));
        let per_page = self
            .per_page
            .filter(|value| *value != 0)
            .map(|value| ("per_page", value.to_string()));

        page.into_iter().chain(per_page).collect()
    }

    /// Encodes the query string, or `None` when no parameter applies.
    #[must_use]
    pub fn query_string(&self) -> Option<String> {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return None;
        }

        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        serializer.extend_pairs(pairs);
        Some(serializer.finish())
    }
}
