//! Octocrab implementation of the review comment gateway.

use async_trait::async_trait;
use http::{Method, Uri};
use http_body_util::BodyExt;
use octocrab::Octocrab;

use crate::github::error::ClientError;
use crate::github::locator::{CommentId, PersonalAccessToken, RepositoryLocator};
use crate::github::models::CommentBody;
use crate::github::pagination::ListReviewCommentsParams;
use crate::github::response::ApiResponse;

use super::ReviewCommentGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

/// One outgoing request: the method, its target and an optional JSON payload.
enum CommentRequest<'a> {
    Get(Uri),
    Delete(Uri),
    Patch(Uri, CommentBody<'a>),
    Post(Uri, CommentBody<'a>),
}

impl CommentRequest<'_> {
    const fn method(&self) -> Method {
        match self {
            Self::Get(_) => Method::GET,
            Self::Delete(_) => Method::DELETE,
            Self::Patch(..) => Method::PATCH,
            Self::Post(..) => Method::POST,
        }
    }

    const fn uri(&self) -> &Uri {
        match self {
            Self::Get(uri) | Self::Delete(uri) | Self::Patch(uri, _) | Self::Post(uri, _) => uri,
        }
    }
}

fn parse_request_uri(path: &str) -> Result<Uri, ClientError> {
    path.parse::<Uri>()
        .map_err(|error| ClientError::InvalidUrl(format!("{path}: {error}")))
}

/// Gateway for the review comments of one repository, backed by Octocrab.
pub struct OctocrabReviewCommentGateway {
    client: Octocrab,
    locator: RepositoryLocator,
}

impl OctocrabReviewCommentGateway {
    /// Creates a gateway that authenticates with `token` and targets the
    /// repository and API base named by `locator`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` when the API base cannot be parsed as
    /// a URI or `ClientError::Api` when Octocrab fails to build a client.
    pub fn new(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
    ) -> Result<Self, ClientError> {
        let client = build_octocrab_client(token, locator.api_base().as_str())?;
        Ok(Self {
            client,
            locator: locator.clone(),
        })
    }

    /// Sends the request and collects the response without looking at its
    /// status.
    async fn execute(
        &self,
        operation: &'static str,
        request: CommentRequest<'_>,
    ) -> Result<ApiResponse, ClientError> {
        let method = request.method();
        let target = request.uri().to_string();
        tracing::debug!(operation, %method, path = %target, "sending review comment request");

        let sent = match request {
            CommentRequest::Get(uri) => self.client._get(uri).await,
            CommentRequest::Delete(uri) => self.client._delete(uri, None::<&()>).await,
            CommentRequest::Patch(uri, payload) => self.client._patch(uri, Some(&payload)).await,
            CommentRequest::Post(uri, payload) => self.client._post(uri, Some(&payload)).await,
        };
        let response = sent.map_err(|error| map_octocrab_error(operation, &error))?;

        let (parts, incoming) = response.into_parts();
        let body = incoming
            .collect()
            .await
            .map_err(|error| map_octocrab_error(operation, &error))?
            .to_bytes();
        let status = parts.status;

        tracing::debug!(operation, %method, path = %target, %status, "received review comment response");
        Ok(ApiResponse::new(status, parts.headers, body))
    }
}

#[async_trait]
impl ReviewCommentGateway for OctocrabReviewCommentGateway {
    async fn list_review_comments(
        &self,
        params: &ListReviewCommentsParams,
    ) -> Result<ApiResponse, ClientError> {
        let collection = self.locator.review_comments_path();
        let path = match params.query_string() {
            Some(query) => format!("{collection}?{query}"),
            None => collection,
        };
        let uri = parse_request_uri(&path)?;
        self.execute("list review comments", CommentRequest::Get(uri))
            .await
    }

    async fn get_review_comment(&self, comment_id: CommentId) -> Result<ApiResponse, ClientError> {
        let uri = parse_request_uri(&self.locator.review_comment_path(comment_id))?;
        self.execute("get review comment", CommentRequest::Get(uri))
            .await
    }

    async fn delete_review_comment(
        &self,
        comment_id: CommentId,
    ) -> Result<ApiResponse, ClientError> {
        let uri = parse_request_uri(&self.locator.review_comment_path(comment_id))?;
        self.execute("delete review comment", CommentRequest::Delete(uri))
            .await
    }

    async fn update_review_comment(
        &self,
        comment_id: CommentId,
        body: &str,
    ) -> Result<ApiResponse, ClientError> {
        let uri = parse_request_uri(&self.locator.review_comment_path(comment_id))?;
        self.execute(
            "update review comment",
            CommentRequest::Patch(uri, CommentBody::new(body)),
        )
        .await
    }

    async fn create_reply(
        &self,
        comment_id: CommentId,
        body: &str,
    ) -> Result<ApiResponse, ClientError> {
        let uri = parse_request_uri(&self.locator.review_comment_replies_path(comment_id))?;
        self.execute(
            "reply to review comment",
            CommentRequest::Post(uri, CommentBody::new(body)),
        )
        .await
    }
}
