//! Review comments library crate for the GitHub pull request API.
//!
//! The library wraps Octocrab to list, fetch, delete, update, and reply to
//! pull request review comments in a single repository. Each operation sends
//! one authenticated request and returns the raw response so callers decide
//! what a status code means.

pub mod cli;
pub mod config;
pub mod github;

pub use cli::{ActionRequest, CommentAction, execute_action};
pub use config::ReviewCommentsConfig;
pub use github::{
    ApiResponse, ClientError, CommentId, ListReviewCommentsParams, OctocrabReviewCommentGateway,
    PersonalAccessToken, RepositoryLocator, ReviewCommentGateway,
};
