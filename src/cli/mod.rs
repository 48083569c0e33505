//! Command-line actions over the review comment gateway.
//!
//! - [`action`]: parses the requested operation and dispatches it to a
//!   [`ReviewCommentGateway`](crate::github::ReviewCommentGateway)
//! - [`output`]: writes the raw response for the user and picks the exit code

pub mod action;
pub mod output;

pub use action::{ActionRequest, CommentAction, execute_action};
pub use output::{exit_code_for, write_response, write_response_to};
