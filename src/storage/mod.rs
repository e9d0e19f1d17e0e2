//! Snapshot persistence.
//!
//! The whole address book is stored as a single versioned snapshot. The
//! [`SnapshotStore`] trait abstracts where snapshots live so the book can be
//! tested against an in-memory store; [`FileSnapshotStore`] is the on-disk
//! implementation.

mod file_store;
mod snapshot;
mod traits;

pub use file_store::FileSnapshotStore;
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};
pub use traits::SnapshotStore;
