use super::Snapshot;
use crate::error::PersistenceResult;

/// Storage for address book snapshots.
///
/// Provides abstraction over snapshot storage and retrieval,
/// enabling different implementations (file, in-memory mock).
pub trait SnapshotStore {
    /// Read the stored snapshot.
    fn read(&self) -> PersistenceResult<Snapshot>;

    /// Replace the stored snapshot.
    fn write(&self, snapshot: &Snapshot) -> PersistenceResult<()>;

    /// Whether a snapshot has been stored.
    fn exists(&self) -> bool;
}
