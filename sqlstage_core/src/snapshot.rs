//! Stage-labelled snapshot files.
//!
//! Each tutorial stage persists its resulting database file under a
//! short label ("00", "01", ...). The next stage loads a copy of the
//! prior stage's file and mutates the copy; the prior file is never
//! touched again.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::Database;

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    /// Opens a snapshot directory, creating it if absent.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn snapshot_path(&self, label: &str) -> PathBuf {
        self.root.join(format!("{label}.db"))
    }

    pub fn exists(&self, label: &str) -> bool {
        self.snapshot_path(label).is_file()
    }

    /// Creates a fresh, empty snapshot for `label`, replacing any
    /// previous file under that label.
    pub fn create(&self, label: &str) -> Result<Database> {
        validate_label(label)?;
        let path = self.snapshot_path(label);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        debug!(label, path = %path.display(), "create snapshot");
        Database::open(path)
    }

    /// Opens the snapshot for `label`; the file must already exist.
    pub fn open(&self, label: &str) -> Result<Database> {
        validate_label(label)?;
        let path = self.snapshot_path(label);
        if !path.is_file() {
            return Err(Error::MissingSnapshot {
                label: label.to_string(),
                path,
            });
        }
        Database::open(path)
    }

    /// Copies the prior stage's snapshot to `current` and opens the
    /// copy. Fails if the prior snapshot was never produced.
    pub fn from_existing(&self, prior: &str, current: &str) -> Result<Database> {
        validate_label(prior)?;
        validate_label(current)?;
        if prior == current {
            return Err(Error::InvalidLabel(current.to_string()));
        }
        let prior_path = self.snapshot_path(prior);
        if !prior_path.is_file() {
            return Err(Error::MissingSnapshot {
                label: prior.to_string(),
                path: prior_path,
            });
        }
        let current_path = self.snapshot_path(current);
        debug!(prior, current, "copy snapshot forward");
        fs::copy(&prior_path, &current_path)?;
        Database::open(current_path)
    }
}

fn validate_label(label: &str) -> Result<()> {
    let ok = !label.is_empty()
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(Error::InvalidLabel(label.to_string()))
    }
}
