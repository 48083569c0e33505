//! Request payloads sent to the review comments API.

use serde::Serialize;

/// JSON payload for updating or replying to a review comment.
///
/// Serialises to `{"body": "<text>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentBody<'a> {
    /// Markdown text of the comment.
    pub body: &'a str,
}

impl<'a> CommentBody<'a> {
    /// Wraps the comment text.
    #[must_use]
    pub const fn new(body: &'a str) -> Self {
        Self { body }
    }
}
