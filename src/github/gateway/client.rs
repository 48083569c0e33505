//! Octocrab client construction for the review comment gateway.

use http::Uri;
use http::header::ACCEPT;
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;

use crate::github::error::ClientError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Media type requested on every call.
pub(super) const GITHUB_V3_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Builds an Octocrab client for the given token and API base URL.
///
/// The client sends `Authorization: Bearer <token>` and the v3 `Accept`
/// header on every request. Octocrab's retry layer is switched off so each
/// call maps to exactly one request on the wire.
///
/// # Errors
///
/// Returns `ClientError::InvalidUrl` when the base URI cannot be parsed or
/// `ClientError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &str,
) -> Result<Octocrab, ClientError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| ClientError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .add_retry_config(RetryConfig::None)
        .add_header(ACCEPT, GITHUB_V3_MEDIA_TYPE.to_owned())
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| ClientError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
