//! Prsync library crate providing bidirectional pull request synchronization.
//!
//! A pipeline step downloads a pull request's comments and labels into a
//! directory as a provider-agnostic record with verbatim provenance payloads;
//! surrounding steps may edit that record; a later step uploads the edits
//! back through minimal, identity-keyed GitHub API mutations.

pub mod config;
pub mod github;
pub mod sync;

pub use config::{PrsyncConfig, SyncMode};
pub use github::{
    CommentRecord, GitReference, LabelRecord, OctocrabGateway, PersonalAccessToken,
    PullRequestGateway, PullRequestLocator, PullRequestRecord, SyncError,
};
pub use sync::{Reconciler, SnapshotWriter, Workspace};
