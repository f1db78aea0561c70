//! Gateways for reading and mutating pull request state through Octocrab.
//!
//! The trait-based design enables mocking in tests while the Octocrab
//! implementation handles real HTTP requests. Read operations return raw
//! `serde_json::Value` payloads so the snapshot writer can persist exactly
//! what the API returned.

mod client;
mod error_mapping;
mod octocrab_gateway;

pub use octocrab_gateway::OctocrabGateway;

use async_trait::async_trait;

use crate::github::error::SyncError;
use crate::github::locator::PullRequestLocator;

/// Provider operations required by the synchronization engine.
///
/// Any REST-based code-hosting API exposing equivalent operations satisfies
/// this contract; the shipped implementation targets GitHub.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// Fetch the raw pull request payload.
    async fn pull_request(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<serde_json::Value, SyncError>;

    /// Fetch the raw payloads of all issue comments on the pull request.
    async fn issue_comments(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<serde_json::Value>, SyncError>;

    /// Create a new comment with the given body. The provider assigns its
    /// identity; the returned payload carries it for callers that care.
    async fn create_comment(
        &self,
        locator: &PullRequestLocator,
        body: &str,
    ) -> Result<serde_json::Value, SyncError>;

    /// Change the body of an existing comment. Author and identity fields on
    /// the remote side are preserved.
    async fn edit_comment(
        &self,
        locator: &PullRequestLocator,
        comment_id: u64,
        body: &str,
    ) -> Result<serde_json::Value, SyncError>;

    /// Delete an existing comment by identity.
    async fn delete_comment(
        &self,
        locator: &PullRequestLocator,
        comment_id: u64,
    ) -> Result<(), SyncError>;

    /// Replace the entire label set of the pull request. An empty slice
    /// clears all labels.
    async fn replace_labels(
        &self,
        locator: &PullRequestLocator,
        labels: &[String],
    ) -> Result<(), SyncError>;
}
