//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach. Credentials and the target
//! repository are resolved once at startup and handed to the client as plain
//! values.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.review-comments.toml` in current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `REVIEW_COMMENTS_TOKEN`,
//!    `REVIEW_COMMENTS_OWNER`, `REVIEW_COMMENTS_REPO`, with `GITHUB_TOKEN`,
//!    `GITHUB_OWNER` and `GITHUB_REPO` as fallbacks
//! 4. **Command-line arguments** – `--token`/`-t`, `--owner`/`-o`,
//!    `--repo`/`-r` and the action flags
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! owner = "octocat"
//! repo = "hello-world"
//! api_base = "https://api.github.com"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::cli::{ActionRequest, CommentAction};
use crate::github::error::ClientError;
use crate::github::locator::{CommentId, GITHUB_API_BASE, RepositoryLocator};
use crate::github::pagination::ListReviewCommentsParams;

/// Fallback environment variable for the token.
const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";
/// Fallback environment variable for the repository owner.
const GITHUB_OWNER_VAR: &str = "GITHUB_OWNER";
/// Fallback environment variable for the repository name.
const GITHUB_REPO_VAR: &str = "GITHUB_REPO";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `REVIEW_COMMENTS_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `REVIEW_COMMENTS_OWNER`, `GITHUB_OWNER`, or `--owner`: Repository owner
/// - `REVIEW_COMMENTS_REPO`, `GITHUB_REPO`, or `--repo`: Repository name
/// - `REVIEW_COMMENTS_API_BASE` or `--api-base`: REST API base URL
///
/// # Example
///
/// ```no_run
/// use review_comments::ReviewCommentsConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = ReviewCommentsConfig::load().expect("failed to load configuration");
/// let locator = config.repository_locator().expect("repository required");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVIEW_COMMENTS",
    discovery(
        dotfile_name = ".review-comments.toml",
        config_file_name = "review-comments.toml",
        app_name = "review-comments"
    )
)]
pub struct ReviewCommentsConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `REVIEW_COMMENTS_TOKEN` or `GITHUB_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Repository owner (e.g., "octocat").
    ///
    /// Can be provided via:
    /// - CLI: `--owner <OWNER>` or `-o <OWNER>`
    /// - Environment: `REVIEW_COMMENTS_OWNER` or `GITHUB_OWNER`
    /// - Config file: `owner = "..."`
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name (e.g., "hello-world").
    ///
    /// Can be provided via:
    /// - CLI: `--repo <REPO>` or `-r <REPO>`
    /// - Environment: `REVIEW_COMMENTS_REPO` or `GITHUB_REPO`
    /// - Config file: `repo = "..."`
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// REST API base URL. Defaults to `https://api.github.com`; GitHub
    /// Enterprise installations use `https://<host>/api/v3`.
    #[ortho_config(cli_short = 'A')]
    pub api_base: Option<String>,

    /// Operation to run: `list`, `get`, `delete`, `update` or `reply`.
    /// Defaults to `list`.
    #[ortho_config(cli_short = 'a')]
    pub action: Option<String>,

    /// Review comment identifier for single-comment actions.
    #[ortho_config(cli_short = 'c')]
    pub comment_id: Option<u64>,

    /// Comment text for `update` and `reply`.
    #[ortho_config(cli_short = 'b')]
    pub body: Option<String>,

    /// Page number for `list`. Zero lets GitHub choose.
    #[ortho_config(cli_short = 'p')]
    pub page: Option<u32>,

    /// Page size for `list`. Zero lets GitHub choose.
    #[ortho_config(cli_short = 'P')]
    pub per_page: Option<u32>,
}

impl ReviewCommentsConfig {
    /// Resolves the token from configuration or the `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, ClientError> {
        self.token
            .clone()
            .or_else(|| env::var(GITHUB_TOKEN_VAR).ok())
            .ok_or(ClientError::MissingToken)
    }

    /// Resolves the repository owner from configuration or `GITHUB_OWNER`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingRepository`] when no owner is available.
    pub fn resolve_owner(&self) -> Result<String, ClientError> {
        self.owner
            .clone()
            .or_else(|| env::var(GITHUB_OWNER_VAR).ok())
            .ok_or(ClientError::MissingRepository { field: "owner" })
    }

    /// Resolves the repository name from configuration or `GITHUB_REPO`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingRepository`] when no name is available.
    pub fn resolve_repo(&self) -> Result<String, ClientError> {
        self.repo
            .clone()
            .or_else(|| env::var(GITHUB_REPO_VAR).ok())
            .ok_or(ClientError::MissingRepository { field: "name" })
    }

    /// Returns the configured API base, or the public GitHub API.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(GITHUB_API_BASE)
    }

    /// Builds the repository locator from the resolved owner, name and API
    /// base.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingRepository`] when owner or name is
    /// missing and [`ClientError::InvalidUrl`] when the API base is invalid.
    pub fn repository_locator(&self) -> Result<RepositoryLocator, ClientError> {
        let owner = self.resolve_owner()?;
        let repo = self.resolve_repo()?;
        RepositoryLocator::with_api_base(self.api_base(), &owner, &repo)
    }

    /// Parses the configured action, defaulting to `list`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnknownAction`] for unrecognised names.
    pub fn comment_action(&self) -> Result<CommentAction, ClientError> {
        self.action
            .as_deref()
            .map_or(Ok(CommentAction::List), str::parse::<CommentAction>)
    }

    /// Returns the list parameters as configured.
    #[must_use]
    pub const fn list_params(&self) -> ListReviewCommentsParams {
        ListReviewCommentsParams {
            page: self.page,
            per_page: self.per_page,
        }
    }

    /// Assembles the action request described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnknownAction`] for unrecognised action names.
    pub fn action_request(&self) -> Result<ActionRequest, ClientError> {
        Ok(ActionRequest {
            action: self.comment_action()?,
            comment_id: self.comment_id.map(CommentId::from),
            body: self.body.clone(),
            params: self.list_params(),
        })
    }
}
