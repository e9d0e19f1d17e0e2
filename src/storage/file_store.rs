//! File-backed snapshot store.
//!
//! Snapshots are written to a uniquely named temporary file in the destination
//! directory and then persisted over the destination, so readers see either
//! the old or the new snapshot and no other file in the directory is touched.

use super::{Snapshot, SnapshotStore, SNAPSHOT_VERSION};
use crate::error::{PersistenceError, PersistenceResult};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Snapshot store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory that holds the snapshot and its temporary files
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn read(&self) -> PersistenceResult<Snapshot> {
        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PersistenceError::Missing {
                path: self.path.clone(),
            },
            _ => self.io_error(&self.path, e),
        })?;

        let snapshot: Snapshot =
            serde_json::from_slice(&bytes).map_err(|source| PersistenceError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        tracing::debug!(
            path = %self.path.display(),
            contacts = snapshot.contacts.len(),
            "Read snapshot"
        );
        Ok(snapshot)
    }

    fn write(&self, snapshot: &Snapshot) -> PersistenceResult<()> {
        let bytes = serde_json::to_vec_pretty(snapshot).map_err(PersistenceError::Encode)?;

        let parent = self.parent_dir();
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(parent, e))?;
        }

        // The temporary file is removed on drop if persisting fails
        let mut temp = NamedTempFile::new_in(parent).map_err(|e| self.io_error(parent, e))?;
        temp.write_all(&bytes)
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| self.io_error(temp.path(), e))?;
        temp.persist(&self.path)
            .map_err(|e| self.io_error(&self.path, e.error))?;

        tracing::trace!("Snapshot written to file: {}", self.path.display());
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
