//! GitHub pull request review comment client.
//!
//! This module maps the five review comment operations (list, get, delete,
//! update, reply) onto single HTTP requests issued through Octocrab. Responses
//! come back verbatim: error statuses are data for the caller, and only
//! failures that prevent a response from arriving are reported as
//! [`ClientError`]s.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod response;

pub use error::ClientError;
pub use gateway::{OctocrabReviewCommentGateway, ReviewCommentGateway};
pub use locator::{
    CommentId, GITHUB_API_BASE, PersonalAccessToken, RepositoryLocator, RepositoryName,
    RepositoryOwner,
};
pub use models::CommentBody;
pub use pagination::ListReviewCommentsParams;
pub use response::ApiResponse;

#[cfg(test)]
pub use gateway::MockReviewCommentGateway;
