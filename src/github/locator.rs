//! Identity wrappers for the target repository and review comments.

use std::fmt;

use url::Url;

use super::error::ClientError;

/// Public GitHub REST API base.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Validates that the owner is non-blank.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingRepository` when the value is blank.
    pub fn new(value: &str) -> Result<Self, ClientError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ClientError::MissingRepository { field: "owner" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Validates that the repository name is non-blank.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingRepository` when the value is blank.
    pub fn new(value: &str) -> Result<Self, ClientError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ClientError::MissingRepository { field: "name" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ClientError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ClientError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

// Keep the secret out of logs and panic messages.
impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("PersonalAccessToken(***)")
    }
}

/// Review comment identifier.
///
/// Any value is accepted; whether the comment exists is for GitHub to say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(u64);

impl CommentId {
    /// Wraps a raw comment identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for CommentId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Target repository and the API base that serves it.
///
/// # Example
///
/// ```
/// use review_comments::github::locator::{CommentId, RepositoryLocator};
///
/// let locator = RepositoryLocator::from_owner_repo("octo", "cat")
///     .expect("should build locator");
/// assert_eq!(locator.api_base().as_str(), "https://api.github.com/");
/// assert_eq!(
///     locator.review_comment_path(CommentId::new(7)),
///     "/repos/octo/cat/pulls/comments/7"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a locator for a repository hosted on `github.com`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingRepository` when owner or repo is blank.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, ClientError> {
        Self::with_api_base(GITHUB_API_BASE, owner, repo)
    }

    /// Creates a locator against an explicit API base, such as a GitHub
    /// Enterprise `https://host/api/v3` endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` when the base is not an absolute URL
    /// and `ClientError::MissingRepository` when owner or repo is blank.
    pub fn with_api_base(api_base: &str, owner: &str, repo: &str) -> Result<Self, ClientError> {
        let parsed =
            Url::parse(api_base.trim()).map_err(|error| ClientError::InvalidUrl(error.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "{api_base} cannot be used as an API base"
            )));
        }

        Ok(Self {
            api_base: parsed,
            owner: RepositoryOwner::new(owner)?,
            repository: RepositoryName::new(repo)?,
        })
    }

    /// API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Path of the repository-wide review comments collection.
    #[must_use]
    pub fn review_comments_path(&self) -> String {
        format!(
            "/repos/{}/{}/pulls/comments",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }

    /// Path of a single review comment.
    #[must_use]
    pub fn review_comment_path(&self, comment_id: CommentId) -> String {
        format!("{}/{comment_id}", self.review_comments_path())
    }

    /// Path used to reply to a review comment.
    #[must_use]
    pub fn review_comment_replies_path(&self, comment_id: CommentId) -> String {
        format!("{}/replies", self.review_comment_path(comment_id))
    }
}
