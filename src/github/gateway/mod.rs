//! Gateways for the pull request review comments API.
//!
//! The trait keeps callers independent of the HTTP stack so they can be
//! exercised against a mock, while the Octocrab implementation issues the real
//! requests. Every method performs exactly one HTTP round trip and hands back
//! the response as GitHub sent it, whatever its status.

mod client;
mod error_mapping;
mod review_comments;

pub use review_comments::OctocrabReviewCommentGateway;

use async_trait::async_trait;

use crate::github::error::ClientError;
use crate::github::locator::CommentId;
use crate::github::pagination::ListReviewCommentsParams;
use crate::github::response::ApiResponse;

/// Gateway for the repository's pull request review comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewCommentGateway: Send + Sync {
    /// `GET /repos/{owner}/{repo}/pulls/comments`, forwarding any set page
    /// controls as query parameters.
    async fn list_review_comments(
        &self,
        params: &ListReviewCommentsParams,
    ) -> Result<ApiResponse, ClientError>;

    /// `GET /repos/{owner}/{repo}/pulls/comments/{id}`.
    async fn get_review_comment(&self, comment_id: CommentId) -> Result<ApiResponse, ClientError>;

    /// `DELETE /repos/{owner}/{repo}/pulls/comments/{id}`; GitHub answers
    /// `204 No Content` on success.
    async fn delete_review_comment(
        &self,
        comment_id: CommentId,
    ) -> Result<ApiResponse, ClientError>;

    /// `PATCH /repos/{owner}/{repo}/pulls/comments/{id}` with `{"body": body}`.
    async fn update_review_comment(
        &self,
        comment_id: CommentId,
        body: &str,
    ) -> Result<ApiResponse, ClientError>;

    /// `POST /repos/{owner}/{repo}/pulls/comments/{id}/replies` with
    /// `{"body": body}`, creating a comment threaded under `comment_id`.
    async fn create_reply(
        &self,
        comment_id: CommentId,
        body: &str,
    ) -> Result<ApiResponse, ClientError>;
}
