//! Review comment actions selectable from the command line.

use std::fmt;
use std::str::FromStr;

use crate::github::{
    ApiResponse, ClientError, CommentId, ListReviewCommentsParams, ReviewCommentGateway,
};

/// One of the five review comment operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentAction {
    /// List the repository's review comments.
    #[default]
    List,
    /// Fetch one review comment.
    Get,
    /// Delete one review comment.
    Delete,
    /// Replace the body of one review comment.
    Update,
    /// Reply to one review comment.
    Reply,
}

impl CommentAction {
    /// Returns the name used on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Delete => "delete",
            Self::Update => "update",
            Self::Reply => "reply",
        }
    }
}

impl fmt::Display for CommentAction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for CommentAction {
    type Err = ClientError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(Self::List),
            "get" => Ok(Self::Get),
            "delete" => Ok(Self::Delete),
            "update" => Ok(Self::Update),
            "reply" => Ok(Self::Reply),
            _ => Err(ClientError::UnknownAction {
                action: value.to_owned(),
            }),
        }
    }
}

/// Everything needed to run a single action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionRequest {
    /// Operation to perform.
    pub action: CommentAction,
    /// Target comment for get, delete, update and reply.
    pub comment_id: Option<CommentId>,
    /// New text for update and reply.
    pub body: Option<String>,
    /// Page controls for list.
    pub params: ListReviewCommentsParams,
}

impl ActionRequest {
    fn require_comment_id(&self) -> Result<CommentId, ClientError> {
        self.comment_id.ok_or(ClientError::MissingCommentId)
    }

    fn require_body(&self) -> Result<&str, ClientError> {
        self.body.as_deref().ok_or(ClientError::MissingBody)
    }
}

/// Runs the requested action against `gateway` and returns GitHub's response.
///
/// Inputs the action needs are checked before any request is sent, so a
/// missing comment id or body never reaches the network.
///
/// # Errors
///
/// Returns [`ClientError::MissingCommentId`] or [`ClientError::MissingBody`]
/// when the action lacks an input, and propagates gateway errors unchanged.
pub async fn execute_action<G>(
    gateway: &G,
    request: &ActionRequest,
) -> Result<ApiResponse, ClientError>
where
    G: ReviewCommentGateway + ?Sized,
{
    match request.action {
        CommentAction::List => gateway.list_review_comments(&request.params).await,
        CommentAction::Get => {
            gateway
                .get_review_comment(request.require_comment_id()?)
                .await
        }
        CommentAction::Delete => {
            gateway
                .delete_review_comment(request.require_comment_id()?)
                .await
        }
        CommentAction::Update => {
            let comment_id = request.require_comment_id()?;
            let body = request.require_body()?;
            gateway.update_review_comment(comment_id, body).await
        }
        CommentAction::Reply => {
            let comment_id = request.require_comment_id()?;
            let body = request.require_body()?;
            gateway.create_reply(comment_id, body).await
        }
    }
}
