//! Error types exposed by the synchronization engine.

use thiserror::Error;

/// Errors surfaced while parsing input, reading or writing the on-disk
/// state, or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyncError {
    /// The CLI did not include a pull request URL.
    #[error("pull request URL is required")]
    MissingPullRequestUrl,

    /// The CLI did not include a working directory.
    #[error("working directory path is required")]
    MissingWorkingDirectory,

    /// The provided URL could not be parsed.
    #[error("pull request URL is invalid: {0}")]
    InvalidUrl(String),

    /// The pull request path is incomplete.
    #[error("pull request URL must match /owner/repo/<kind>/<number>")]
    MissingPathSegments,

    /// The pull request number is not a valid integer.
    #[error("pull request number must be a non-negative integer")]
    InvalidPullRequestNumber,

    /// The supplied personal access token was blank.
    #[error("personal access token must not be blank")]
    BlankToken,

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// A JSON payload could not be decoded.
    #[error("decode error: {message}")]
    Decode {
        /// The payload or path that failed to decode and the serde detail.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
