//! Download path: snapshots provider state into a workspace.

use camino::Utf8Path;

use crate::github::SyncError;
use crate::github::gateway::PullRequestGateway;
use crate::github::locator::PullRequestLocator;
use crate::github::models::{ApiComment, ApiPullRequest, GITHUB_PROVIDER, PullRequestRecord};

use super::workspace::Workspace;

/// Fetches provider state and persists it as the generic record plus
/// verbatim raw payloads.
///
/// Every run fully overwrites prior content at the workspace paths; with
/// unchanged provider state the output is reproduced identically. A failed
/// fetch or write aborts the download, and files already written are not
/// rolled back.
pub struct SnapshotWriter<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> SnapshotWriter<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    /// Create a new snapshot writer using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Downloads the pull request into `dir` and returns the assembled
    /// generic record.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures unchanged, [`SyncError::Io`] for write
    /// failures, and [`SyncError::Decode`] when a provider payload does not
    /// hold the expected fields.
    pub async fn download(
        &self,
        locator: &PullRequestLocator,
        dir: &Utf8Path,
    ) -> Result<PullRequestRecord, SyncError> {
        let workspace = Workspace::new(dir);
        tracing::info!(
            number = locator.number().get(),
            dir = %dir,
            "downloading pull request state"
        );

        let raw_payload = self.client.pull_request(locator).await?;
        let raw_path = workspace.raw_pull_request_path(GITHUB_PROVIDER);
        workspace.write_json(&raw_path, &raw_payload)?;
        tracing::info!(path = %raw_path, "wrote raw pull request payload");

        let api: ApiPullRequest =
            serde_json::from_value(raw_payload).map_err(|error| SyncError::Decode {
                message: format!("unexpected pull request payload: {error}"),
            })?;
        let mut record = api.into_record(raw_path);

        for payload in self.client.issue_comments(locator).await? {
            let comment: ApiComment =
                serde_json::from_value(payload.clone()).map_err(|error| SyncError::Decode {
                    message: format!("unexpected comment payload: {error}"),
                })?;
            let raw_comment_path = workspace.raw_comment_path(GITHUB_PROVIDER, comment.id);
            workspace.write_json(&raw_comment_path, &payload)?;
            tracing::info!(id = comment.id, path = %raw_comment_path, "wrote raw comment payload");
            record.comments.push(comment.into_record(raw_comment_path));
        }

        let record_path = workspace.record_path();
        workspace.write_json(&record_path, &record)?;
        tracing::info!(path = %record_path, "wrote generic pull request record");
        Ok(record)
    }
}
