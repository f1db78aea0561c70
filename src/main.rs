//! Prsync CLI entrypoint: download or upload pull request state.

use std::io::{self, Write};
use std::process::ExitCode;

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use prsync::{
    OctocrabGateway, PrsyncConfig, PullRequestLocator, Reconciler, SnapshotWriter, SyncError,
    SyncMode,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), SyncError> {
    let config = load_config()?;

    let mode = config.sync_mode()?;
    let pr_url = config.require_pr_url()?;
    let dir = Utf8Path::new(config.require_path()?);

    let locator = PullRequestLocator::parse(pr_url)?;
    let token = config.resolve_token();
    let gateway = OctocrabGateway::for_token(token.as_ref(), &locator)?;

    let summary = match mode {
        SyncMode::Download => {
            let record = SnapshotWriter::new(&gateway).download(&locator, dir).await?;
            format!(
                "Downloaded pull request #{} to {dir}: {} comments, {} labels",
                locator.number().get(),
                record.comments.len(),
                record.labels.len()
            )
        }
        SyncMode::Upload => {
            Reconciler::new(&gateway).upload(&locator, dir).await?;
            format!(
                "Uploaded pull request #{} from {dir}",
                locator.number().get()
            )
        }
    };

    write_summary(&summary)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`SyncError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<PrsyncConfig, SyncError> {
    PrsyncConfig::load().map_err(|error| SyncError::Configuration {
        message: error.to_string(),
    })
}

fn write_summary(message: &str) -> Result<(), SyncError> {
    writeln!(io::stdout().lock(), "{message}").map_err(|error| SyncError::Io {
        message: error.to_string(),
    })
}
