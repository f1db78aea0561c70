//! Bidirectional synchronization between GitHub and a workspace directory.
//!
//! The download path ([`SnapshotWriter`]) turns provider state into the
//! generic on-disk model with verbatim provenance payloads; the upload path
//! ([`Reconciler`]) turns a possibly edited model back into minimal provider
//! mutations. The two paths never run concurrently within one invocation,
//! and each run owns its directory exclusively.

pub mod reconcile;
pub mod snapshot;
pub mod workspace;

pub use reconcile::Reconciler;
pub use snapshot::SnapshotWriter;
pub use workspace::{RECORD_FILE, Workspace};
