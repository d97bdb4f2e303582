// ABOUTME: Remote listing seam for artifact stores and function registries.
// ABOUTME: Exports the ListingClient trait and the local snapshot backend.

mod client;
mod error;
mod snapshot;

pub use client::{FunctionSummary, ListingClient, ObjectSummary, VersionSummary};
pub use error::{RemoteError, RemoteErrorKind};
pub use snapshot::{FunctionSnapshot, Snapshot, SnapshotClient};
