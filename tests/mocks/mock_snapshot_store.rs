use address_book::error::{PersistenceError, PersistenceResult};
use address_book::storage::{Snapshot, SnapshotStore};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock snapshot store for testing.
///
/// Keeps the last written snapshot in memory, can be told to fail writes,
/// and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSnapshotStore {
    snapshot: Arc<Mutex<Option<Snapshot>>>,
    fail_writes: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockSnapshotStore {
    /// Create a new empty MockSnapshotStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `snapshot`.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        let store = Self::new();
        *store.snapshot.lock().unwrap() = Some(snapshot);
        store
    }

    /// Make every following write fail.
    pub fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }

    /// The last written snapshot.
    pub fn stored(&self) -> Option<Snapshot> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn increment_call_count(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl SnapshotStore for MockSnapshotStore {
    fn read(&self) -> PersistenceResult<Snapshot> {
        self.increment_call_count("read");
        self.stored().ok_or_else(|| PersistenceError::Missing {
            path: PathBuf::from("memory"),
        })
    }

    fn write(&self, snapshot: &Snapshot) -> PersistenceResult<()> {
        self.increment_call_count("write");
        if *self.fail_writes.lock().unwrap() {
            return Err(PersistenceError::Io {
                path: PathBuf::from("memory"),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            });
        }
        *self.snapshot.lock().unwrap() = Some(snapshot.clone());
        Ok(())
    }

    fn exists(&self) -> bool {
        self.snapshot.lock().unwrap().is_some()
    }
}
