//! Error types for sqlstage_core

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A stage tried to load a snapshot that was never produced.
    #[error("snapshot '{label}' not found at {}", path.display())]
    MissingSnapshot { label: String, path: PathBuf },

    #[error("invalid stage label '{0}'")]
    InvalidLabel(String),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
