//! On-disk layout for synchronized pull request state.
//!
//! A workspace is the directory handed to the process. It holds the generic
//! record at `pr.json` plus a provider subtree of verbatim raw payloads:
//!
//! ```text
//! <dir>/pr.json                        generic record
//! <dir>/<provider>/pr.json            raw pull request payload
//! <dir>/<provider>/comments/<id>.json raw comment payloads
//! ```

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::github::SyncError;

/// File name of the generic record inside the workspace.
pub const RECORD_FILE: &str = "pr.json";

/// Path layout and JSON persistence for one workspace directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: Utf8PathBuf,
}

impl Workspace {
    /// Creates a workspace rooted at `dir`. Nothing is touched on disk until
    /// a write occurs.
    #[must_use]
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self { root: dir.into() }
    }

    /// Path of the generic record.
    #[must_use]
    pub fn record_path(&self) -> Utf8PathBuf {
        self.root.join(RECORD_FILE)
    }

    /// Path of the verbatim raw pull request payload for `provider`.
    #[must_use]
    pub fn raw_pull_request_path(&self, provider: &str) -> Utf8PathBuf {
        self.root.join(provider).join(RECORD_FILE)
    }

    /// Path of the verbatim raw payload for the comment with `comment_id`.
    #[must_use]
    pub fn raw_comment_path(&self, provider: &str, comment_id: u64) -> Utf8PathBuf {
        self.root
            .join(provider)
            .join("comments")
            .join(format!("{comment_id}.json"))
    }

    /// Serializes `value` as JSON to `path`, creating parent directories and
    /// truncating any prior content.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Io`] when the file cannot be created or written,
    /// or when serialization fails.
    pub fn write_json<T: Serialize>(&self, path: &Utf8Path, value: &T) -> Result<(), SyncError> {
        let mut file = create_file_with_parents(path)?;
        let encoded = serde_json::to_vec(value).map_err(|error| SyncError::Io {
            message: format!("failed to serialize '{path}': {error}"),
        })?;
        file.write_all(&encoded).map_err(|error| SyncError::Io {
            message: format!("failed to write '{path}': {error}"),
        })?;
        file.flush().map_err(|error| SyncError::Io {
            message: format!("failed to flush '{path}': {error}"),
        })
    }

    /// Reads and deserializes JSON from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Io`] when the file cannot be read or
    /// [`SyncError::Decode`] when its content is not valid JSON for `T`.
    pub fn read_json<T: DeserializeOwned>(&self, path: &Utf8Path) -> Result<T, SyncError> {
        let (dir, file_name) = open_payload_dir(path, false)?;
        let content = dir.read_to_string(file_name).map_err(|error| SyncError::Io {
            message: format!("failed to read '{path}': {error}"),
        })?;
        serde_json::from_str(&content).map_err(|error| SyncError::Decode {
            message: format!("failed to decode '{path}': {error}"),
        })
    }
}

/// Creates a file at `path`, ensuring parent directories exist first.
fn create_file_with_parents(path: &Utf8Path) -> Result<cap_std::fs_utf8::File, SyncError> {
    let (dir, file_name) = open_payload_dir(path, true)?;
    dir.create(file_name).map_err(|error| SyncError::Io {
        message: format!("failed to create payload file '{path}': {error}"),
    })
}

/// Opens a capability handle on the parent directory of `path` and returns it
/// with the file name. Both the read and write paths address files through
/// this handle rather than ambient `std::fs` calls. With `create` set,
/// missing parent directories are created first.
fn open_payload_dir(path: &Utf8Path, create: bool) -> Result<(Dir, &str), SyncError> {
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| SyncError::Io {
        message: format!("invalid payload path '{path}': no file name"),
    })?;

    let (anchor, rel_parent) = if parent.is_absolute() {
        let root = open_ambient("/")?;
        let rel = parent.strip_prefix("/").map_err(|_| SyncError::Io {
            message: format!("failed to normalise payload directory '{parent}'"),
        })?;
        (root, rel)
    } else {
        (open_ambient(".")?, parent)
    };

    if rel_parent.as_str().is_empty() || rel_parent == Utf8Path::new(".") {
        return Ok((anchor, file_name));
    }

    if create {
        anchor
            .create_dir_all(rel_parent)
            .map_err(|error| SyncError::Io {
                message: format!("failed to create payload directory '{parent}': {error}"),
            })?;
    }
    let dir = anchor.open_dir(rel_parent).map_err(|error| SyncError::Io {
        message: format!("failed to open payload directory '{parent}': {error}"),
    })?;
    Ok((dir, file_name))
}

fn open_ambient(path: &str) -> Result<Dir, SyncError> {
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|error| SyncError::Io {
        message: format!("failed to open directory '{path}': {error}"),
    })
}
