//! Error types exposed by the review comment client.

use thiserror::Error;

/// Errors surfaced while resolving inputs or talking to GitHub.
///
/// HTTP error statuses (401, 403, 404, 422, 5xx) are not represented here:
/// they reach the caller as ordinary responses. Only failures that prevent a
/// response from being obtained at all become a `ClientError`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The authentication token was missing or blank.
    #[error("personal access token is required")]
    MissingToken,

    /// The repository owner or name was missing or blank.
    #[error("repository {field} is required")]
    MissingRepository {
        /// Which part of the repository identifier was absent.
        field: &'static str,
    },

    /// A single-comment operation was requested without a comment identifier.
    #[error("comment id is required for this action")]
    MissingCommentId,

    /// An update or reply was requested without a comment body.
    #[error("comment body is required for this action")]
    MissingBody,

    /// The requested action name is not one of the supported operations.
    #[error("unknown action `{action}` (expected list, get, delete, update or reply)")]
    UnknownAction {
        /// The action string that could not be recognised.
        action: String,
    },

    /// The API base or request path could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// Networking failed before a response was received.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The HTTP client could not be built or a request could not be encoded.
    #[error("GitHub client error: {message}")]
    Api {
        /// Description of the failure.
        message: String,
    },

    /// A response body did not have the shape the caller asked for.
    #[error("response body could not be decoded: {message}")]
    Decode {
        /// Deserialisation error detail.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
