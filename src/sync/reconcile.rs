//! Upload path: reconciles provider state to match an edited workspace.
//!
//! Two sub-syncs run unconditionally in a fixed order. Labels are replaced
//! wholesale — the on-disk list is the desired set, an empty list clears all
//! remote labels. Comments are reconciled through an identity-keyed diff:
//! remote comments absent from the record are deleted, matched comments with
//! a differing body are edited in place, and record comments that matched no
//! remote identity (chiefly those with no identity at all) are created.
//! Convergence does not depend on processing order because every operation is
//! keyed by identity, not position.

use std::collections::HashMap;

use camino::Utf8Path;

use crate::github::SyncError;
use crate::github::gateway::PullRequestGateway;
use crate::github::locator::PullRequestLocator;
use crate::github::models::{ApiComment, CommentRecord, PullRequestRecord};

use super::workspace::Workspace;

/// Applies the minimal set of provider mutations needed to make remote state
/// match the workspace record.
///
/// The reconciler is not atomic: a failed call aborts the upload and calls
/// already issued are not undone, matching the remote API it drives.
/// Re-running the upload is the recovery mechanism; every operation except
/// creating an identity-less comment is safely re-appliable.
pub struct Reconciler<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> Reconciler<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    /// Create a new reconciler using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Reads the generic record from `dir` and uploads its mutations.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Io`] when the record cannot be read,
    /// [`SyncError::Decode`] when it holds malformed JSON, and propagates the
    /// first failed gateway call unchanged.
    pub async fn upload(
        &self,
        locator: &PullRequestLocator,
        dir: &Utf8Path,
    ) -> Result<(), SyncError> {
        let workspace = Workspace::new(dir);
        let record_path = workspace.record_path();
        let record: PullRequestRecord = workspace.read_json(&record_path)?;
        tracing::info!(
            number = locator.number().get(),
            path = %record_path,
            "uploading pull request state"
        );

        self.sync_labels(locator, &record).await?;
        self.sync_comments(locator, &record).await
    }

    /// Replaces the remote label set with the record's label texts.
    async fn sync_labels(
        &self,
        locator: &PullRequestLocator,
        record: &PullRequestRecord,
    ) -> Result<(), SyncError> {
        let labels: Vec<String> = record
            .labels
            .iter()
            .map(|label| label.text.clone())
            .collect();
        tracing::info!(number = locator.number().get(), ?labels, "replacing label set");
        self.client.replace_labels(locator, &labels).await
    }

    /// Diffs the record's comments against the provider's current list and
    /// issues the minimal create/edit/delete calls.
    async fn sync_comments(
        &self,
        locator: &PullRequestLocator,
        record: &PullRequestRecord,
    ) -> Result<(), SyncError> {
        // Desired state: identity-keyed map plus a bucket of locally
        // authored comments. Two new comments with identical text stay
        // distinct and are both created.
        let mut desired: HashMap<u64, &CommentRecord> = HashMap::new();
        let mut authored: Vec<&CommentRecord> = Vec::new();
        for comment in &record.comments {
            if comment.id == 0 {
                authored.push(comment);
            } else {
                desired.insert(comment.id, comment);
            }
        }

        for payload in self.client.issue_comments(locator).await? {
            let current: ApiComment =
                serde_json::from_value(payload).map_err(|error| SyncError::Decode {
                    message: format!("unexpected comment payload: {error}"),
                })?;

            match desired.remove(&current.id) {
                None => {
                    tracing::info!(id = current.id, "deleting comment");
                    self.client.delete_comment(locator, current.id).await?;
                }
                Some(wanted) if wanted.text != current.body.as_deref().unwrap_or_default() => {
                    tracing::info!(id = current.id, "updating comment body");
                    self.client
                        .edit_comment(locator, current.id, &wanted.text)
                        .await?;
                }
                Some(_) => {}
            }
        }

        // Leftovers matched no remote identity; the provider assigns new
        // identities, which a subsequent download picks up.
        for comment in desired.into_values().chain(authored) {
            tracing::info!(text = %comment.text, "creating comment");
            self.client.create_comment(locator, &comment.text).await?;
        }

        Ok(())
    }
}
