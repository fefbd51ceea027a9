//! Error types for store mutations and queries.

use std::path::PathBuf;

use thiserror::Error;

use crate::album::AlbumId;
use crate::item::MediaItemId;

/// Errors surfaced by the media store.
///
/// The engine treats every variant the same way (the run is marked
/// errored); the taxonomy exists for hosts that log or map failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Item is unknown to the store.
    #[error("Media item not found: {id}")]
    ItemNotFound { id: MediaItemId },

    /// Album is unknown to the store.
    #[error("Album not found: {id}")]
    AlbumNotFound { id: AlbumId },

    /// Store rejected the mutation for lack of rights.
    #[error("Permission denied: {target}")]
    PermissionDenied { target: String },

    /// I/O error from the storage backend.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other backend failure.
    #[error("{message}")]
    Backend { message: String },
}

impl StoreError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                target: path.display().to_string(),
            },
            _ => Self::Io { path, source },
        }
    }

    /// Create a generic backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}
