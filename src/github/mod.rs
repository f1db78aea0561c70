//! GitHub pull request intake and mutation layer.
//!
//! This module wraps Octocrab to parse pull request URLs, fetch raw pull
//! request and comment payloads, and apply comment and label mutations.
//! Errors are mapped into precise variants so that callers can surface
//! failures without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;

pub use error::SyncError;
pub use gateway::{OctocrabGateway, PullRequestGateway};
pub use locator::{
    PersonalAccessToken, PullRequestLocator, PullRequestNumber, RepositoryName, RepositoryOwner,
};
pub use models::{
    CommentRecord, GITHUB_PROVIDER, GitReference, LabelRecord, PullRequestRecord,
};

#[cfg(test)]
pub use gateway::MockPullRequestGateway;

#[cfg(test)]
mod tests;
