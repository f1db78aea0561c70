//! Octocrab client construction for the gateway implementation.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::SyncError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the given API base URL.
///
/// The token is threaded in explicitly rather than read from the process
/// environment; when absent the client runs unauthenticated, which suffices
/// for public read access (write operations will fail with a provider-side
/// authorization error).
///
/// # Errors
///
/// Returns [`SyncError::InvalidUrl`] when the base URI cannot be parsed or
/// [`SyncError::Api`] when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: Option<&PersonalAccessToken>,
    api_base: &str,
) -> Result<Octocrab, SyncError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| SyncError::InvalidUrl(error.to_string()))?;

    let mut builder = Octocrab::builder();
    if let Some(secret) = token {
        builder = builder.personal_token(secret.value().to_owned());
    }

    builder
        .base_uri(base_uri)
        .map_err(|error| SyncError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
