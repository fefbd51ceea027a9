//! Media store contract.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::album::{AlbumDescriptor, AlbumFilter, AlbumId};
use crate::error::StoreError;
use crate::item::MediaItem;

/// The persistent media library, as seen by the mutation engine.
///
/// Every call settles with success or failure; there is no partial or
/// streaming result per item. Implementations wrap the platform media
/// database or a remote service.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Move an item to the recycle album, or erase it for good when
    /// `permanent` is set.
    async fn trash(&self, item: &MediaItem, permanent: bool) -> Result<(), StoreError>;

    /// Restore a soft-deleted item from the recycle album.
    async fn recover(&self, item: &MediaItem) -> Result<(), StoreError>;

    /// Fetch the albums matching a filter.
    async fn query_albums(&self, filter: &AlbumFilter) -> Result<Vec<AlbumDescriptor>, StoreError>;

    /// Create a user album under `path` with the given display name.
    async fn create_album(&self, path: &Path, name: &str) -> Result<AlbumDescriptor, StoreError>;

    /// Commit a new display name for an album.
    async fn rename_album(&self, id: &AlbumId, new_name: &str) -> Result<(), StoreError>;

    /// Root directory under which user albums live.
    async fn albums_root(&self) -> Result<PathBuf, StoreError>;
}
