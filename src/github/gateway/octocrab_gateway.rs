//! Octocrab implementation of the pull request gateway.

use async_trait::async_trait;
use http::Uri;
use octocrab::{Octocrab, Page};
use serde_json::{Value, json};

use crate::github::error::SyncError;
use crate::github::locator::{PersonalAccessToken, PullRequestLocator};

use super::PullRequestGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{extract_github_message, map_http_error, map_octocrab_error};

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a gateway against the API base derived from the locator's host.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::InvalidUrl`] when the base URI cannot be parsed
    /// or [`SyncError::Api`] when Octocrab fails to construct a client.
    pub fn for_token(
        token: Option<&PersonalAccessToken>,
        locator: &PullRequestLocator,
    ) -> Result<Self, SyncError> {
        Self::with_base_url(token, locator.api_base().as_str())
    }

    /// Builds a gateway against an explicit API base URL.
    ///
    /// # Errors
    ///
    /// As [`OctocrabGateway::for_token`].
    pub fn with_base_url(
        token: Option<&PersonalAccessToken>,
        api_base: &str,
    ) -> Result<Self, SyncError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl PullRequestGateway for OctocrabGateway {
    async fn pull_request(&self, locator: &PullRequestLocator) -> Result<Value, SyncError> {
        self.client
            .get(locator.pull_request_path(), None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("pull request", &error))
    }

    async fn issue_comments(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<Value>, SyncError> {
        let page = self
            .client
            .get::<Page<Value>, _, _>(locator.comments_path(), None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("issue comments", &error))?;

        self.client
            .all_pages(page)
            .await
            .map_err(|error| map_octocrab_error("issue comments", &error))
    }

    async fn create_comment(
        &self,
        locator: &PullRequestLocator,
        body: &str,
    ) -> Result<Value, SyncError> {
        self.client
            .post(locator.comments_path(), Some(&json!({ "body": body })))
            .await
            .map_err(|error| map_octocrab_error("create comment", &error))
    }

    async fn edit_comment(
        &self,
        locator: &PullRequestLocator,
        comment_id: u64,
        body: &str,
    ) -> Result<Value, SyncError> {
        self.client
            .patch(
                locator.comment_path(comment_id),
                Some(&json!({ "body": body })),
            )
            .await
            .map_err(|error| map_octocrab_error("edit comment", &error))
    }

    async fn delete_comment(
        &self,
        locator: &PullRequestLocator,
        comment_id: u64,
    ) -> Result<(), SyncError> {
        let uri: Uri = locator
            .comment_path(comment_id)
            .parse::<Uri>()
            .map_err(|error| SyncError::InvalidUrl(error.to_string()))?;

        let response = self
            .client
            ._delete(uri, None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("delete comment", &error))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = self
            .client
            .body_to_string(response)
            .await
            .unwrap_or_else(|_| String::new());
        Err(map_http_error(
            "delete comment",
            status,
            extract_github_message(&body),
        ))
    }

    async fn replace_labels(
        &self,
        locator: &PullRequestLocator,
        labels: &[String],
    ) -> Result<(), SyncError> {
        self.client
            .put::<Value, _, _>(locator.labels_path(), Some(&json!({ "labels": labels })))
            .await
            .map(|_| ())
            .map_err(|error| map_octocrab_error("replace labels", &error))
    }
}
