//! Recording index port

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error when deleting a recording's storage.
#[derive(Debug, Clone, Error)]
#[error("failed to delete recording at {path}: {reason}")]
pub struct RecordingDeleteError {
    pub path: PathBuf,
    pub reason: String,
}

/// Port for the host's recording index.
pub trait RecordingIndex {
    /// Whether the index lists a recording stored at `path`.
    fn find_by_path(&self, path: &Path) -> bool;

    /// Delete the recording's storage (its files on disk).
    fn delete_storage(&mut self, path: &Path) -> Result<(), RecordingDeleteError>;

    /// Drop the index entry for `path`. Call after a successful
    /// [`delete_storage`](RecordingIndex::delete_storage).
    fn remove(&mut self, path: &Path);
}
