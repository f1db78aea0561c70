//! Generic on-disk pull request model and raw GitHub payload mapping.
//!
//! The generic record is the provider-agnostic shape shared by the download
//! and upload paths. Field names on disk (`Type`, `ID`, `SHA`, ...) match the
//! format the original pipeline helper produced, so records written by either
//! tool stay mutually readable. `id` and `raw` fields are output-only: the
//! download path writes them and editors of the on-disk form must leave them
//! alone; `labels` and each comment's `text` are the fields a consumer is
//! expected to mutate before upload.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Provider tag recorded in generic records produced by the GitHub paths.
pub const GITHUB_PROVIDER: &str = "github";

/// Provider-agnostic pull request record written to `<dir>/pr.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequestRecord {
    /// Provider tag, e.g. `github`.
    #[serde(rename = "Type")]
    pub kind: String,
    /// Provider-assigned numeric identity of the pull request. Output only.
    #[serde(rename = "ID")]
    pub id: u64,
    /// Branch position the pull request merges from.
    #[serde(rename = "Head")]
    pub head: GitReference,
    /// Branch position the pull request merges into.
    #[serde(rename = "Base")]
    pub base: GitReference,
    /// Discussion comments in provider order.
    #[serde(rename = "Comments")]
    pub comments: Vec<CommentRecord>,
    /// Label set, order preserved, duplicates passed through.
    #[serde(rename = "Labels")]
    pub labels: Vec<LabelRecord>,
    /// Path to the verbatim provider payload captured at download time.
    /// Output only.
    #[serde(rename = "Raw")]
    pub raw: Option<Utf8PathBuf>,
}

/// Immutable snapshot of a branch position taken at download time.
///
/// Branch movement between download and upload is not re-synced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitReference {
    /// Clone URL of the repository holding the branch.
    #[serde(rename = "Repo")]
    pub repo: String,
    /// Ref name.
    #[serde(rename = "Branch")]
    pub branch: String,
    /// Commit hash the branch pointed at.
    #[serde(rename = "SHA")]
    pub sha: String,
}

/// A pull request discussion comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentRecord {
    /// Desired comment body. The only mutable field.
    #[serde(rename = "Text")]
    pub text: String,
    /// Provider-reported author login. Output only.
    #[serde(rename = "Author")]
    pub author: String,
    /// Provider-assigned comment identity. Zero (or absent in JSON) marks a
    /// locally authored comment that does not yet exist on the provider.
    #[serde(rename = "ID")]
    pub id: u64,
    /// Path to the verbatim provider payload, present only for comments that
    /// existed at download time. Output only.
    #[serde(rename = "Raw")]
    pub raw: Option<Utf8PathBuf>,
}

/// A pull request label. Labels carry no independent identity; the label set
/// is replaced wholesale on upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelRecord {
    /// Label name.
    #[serde(rename = "Text")]
    pub text: String,
}

/// Typed view of the raw GitHub pull request payload.
///
/// The snapshot writer persists the payload verbatim as `serde_json::Value`
/// and decodes this projection from it, so the on-disk provenance file is
/// exactly what the API returned.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequest {
    pub(crate) id: u64,
    #[serde(default)]
    pub(crate) head: Option<ApiBranch>,
    #[serde(default)]
    pub(crate) base: Option<ApiBranch>,
    #[serde(default)]
    pub(crate) labels: Vec<ApiLabel>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiBranch {
    #[serde(rename = "ref", default)]
    pub(crate) branch: Option<String>,
    #[serde(default)]
    pub(crate) sha: Option<String>,
    #[serde(default)]
    pub(crate) repo: Option<ApiRepository>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    #[serde(default)]
    pub(crate) clone_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiLabel {
    #[serde(default)]
    pub(crate) name: Option<String>,
}

/// Typed view of a raw GitHub issue comment payload.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiComment {
    pub(crate) id: u64,
    #[serde(default)]
    pub(crate) body: Option<String>,
    #[serde(default)]
    pub(crate) user: Option<ApiUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    #[serde(default)]
    pub(crate) login: Option<String>,
}

fn reference_from(branch: Option<ApiBranch>) -> GitReference {
    branch.map_or_else(GitReference::default, |position| GitReference {
        repo: position
            .repo
            .and_then(|repo| repo.clone_url)
            .unwrap_or_default(),
        branch: position.branch.unwrap_or_default(),
        sha: position.sha.unwrap_or_default(),
    })
}

impl ApiPullRequest {
    /// Builds the generic record for this payload, without comments.
    pub(crate) fn into_record(self, raw: Utf8PathBuf) -> PullRequestRecord {
        PullRequestRecord {
            kind: GITHUB_PROVIDER.to_owned(),
            id: self.id,
            head: reference_from(self.head),
            base: reference_from(self.base),
            comments: Vec::new(),
            labels: self
                .labels
                .into_iter()
                .map(|label| LabelRecord {
                    text: label.name.unwrap_or_default(),
                })
                .collect(),
            raw: Some(raw),
        }
    }
}

impl ApiComment {
    /// Builds the generic comment record for this payload.
    pub(crate) fn into_record(self, raw: Utf8PathBuf) -> CommentRecord {
        CommentRecord {
            text: self.body.unwrap_or_default(),
            author: self.user.and_then(|user| user.login).unwrap_or_default(),
            id: self.id,
            raw: Some(raw),
        }
    }
}
