//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.prsync.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PRSYNC_MODE`, `PRSYNC_PR_URL`,
//!    `PRSYNC_PATH`, `PRSYNC_TOKEN`, or legacy `GITHUBOAUTHTOKEN`
//! 4. **Command-line arguments** – `--mode`, `--pr-url`, `--path`, `--token`

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::SyncError;
use crate::github::locator::PersonalAccessToken;

/// Direction of one synchronization run. A process runs in exactly one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Fetch provider state and write it into the workspace.
    Download,
    /// Read the workspace record and push its mutations to the provider.
    Upload,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `PRSYNC_MODE` or `--mode`: `download` (default) or `upload`
/// - `PRSYNC_PR_URL` or `--pr-url`: Pull request URL
/// - `PRSYNC_PATH` or `--path`: Workspace directory
/// - `PRSYNC_TOKEN`, `GITHUBOAUTHTOKEN`, or `--token`: Access token; when no
///   source provides one, the provider client runs unauthenticated
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PRSYNC",
    discovery(
        dotfile_name = ".prsync.toml",
        config_file_name = "prsync.toml",
        app_name = "prsync"
    )
)]
pub struct PrsyncConfig {
    /// Whether to operate in download or upload mode.
    ///
    /// Can be provided via:
    /// - CLI: `--mode <MODE>` or `-m <MODE>`
    /// - Environment: `PRSYNC_MODE`
    /// - Config file: `mode = "..."`
    #[ortho_config(cli_short = 'm')]
    pub mode: Option<String>,

    /// URL of the pull request to synchronize.
    ///
    /// Can be provided via:
    /// - CLI: `--pr-url <URL>` or `-u <URL>`
    /// - Environment: `PRSYNC_PR_URL`
    /// - Config file: `pr_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub pr_url: Option<String>,

    /// Directory under which the pull request state is stored.
    ///
    /// Can be provided via:
    /// - CLI: `--path <DIR>` or `-p <DIR>`
    /// - Environment: `PRSYNC_PATH`
    /// - Config file: `path = "..."`
    #[ortho_config(cli_short = 'p')]
    pub path: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `PRSYNC_TOKEN` or `GITHUBOAUTHTOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,
}

impl PrsyncConfig {
    /// Parses the configured mode, defaulting to download.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Configuration`] for any value other than
    /// `download` or `upload`.
    pub fn sync_mode(&self) -> Result<SyncMode, SyncError> {
        match self.mode.as_deref() {
            None | Some("download") => Ok(SyncMode::Download),
            Some("upload") => Ok(SyncMode::Upload),
            Some(other) => Err(SyncError::Configuration {
                message: format!("unknown mode '{other}': expected 'download' or 'upload'"),
            }),
        }
    }

    /// Returns the pull request URL or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MissingPullRequestUrl`] when no URL is configured.
    pub fn require_pr_url(&self) -> Result<&str, SyncError> {
        self.pr_url
            .as_deref()
            .ok_or(SyncError::MissingPullRequestUrl)
    }

    /// Returns the workspace directory or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MissingWorkingDirectory`] when no directory is
    /// configured.
    pub fn require_path(&self) -> Result<&str, SyncError> {
        self.path.as_deref().ok_or(SyncError::MissingWorkingDirectory)
    }

    /// Resolves the token from configuration or the legacy `GITHUBOAUTHTOKEN`
    /// environment variable.
    ///
    /// A missing or blank token is not an error: the provider client then
    /// runs unauthenticated with read-only public access.
    #[must_use]
    pub fn resolve_token(&self) -> Option<PersonalAccessToken> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUBOAUTHTOKEN").ok())
            .and_then(|token| PersonalAccessToken::new(token).ok())
    }
}
