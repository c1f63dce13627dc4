// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// Backing data file is missing or unreadable.
    #[error("catalog file unavailable: {}: {source}", path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid site manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two manifest pages resolve to the same output file.
    #[error("pages '{first}' and '{second}' both write {}", path.display())]
    OutputCollision {
        path: PathBuf,
        first: String,
        second: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    pub fn is_file_unavailable(&self) -> bool {
        matches!(self, CatalogError::FileUnavailable { .. })
    }
}

// Crate-wide result type
pub type Result<T> = std::result::Result<T, CatalogError>;
