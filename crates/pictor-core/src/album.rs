//! Album descriptor and query filter types.

use std::path::{Path, PathBuf};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Unique identifier for an album within the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlbumId(pub CompactString);

impl AlbumId {
    /// Create a new AlbumId from a string-ish value.
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AlbumId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Selection filter backing an album.
///
/// User albums map to a storage location; the virtual kinds are dynamic
/// filters the store evaluates at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlbumKind {
    /// A user-created album backed by a directory.
    User,
    /// The camera roll.
    Camera,
    /// Items marked as favorites.
    Favorites,
    /// All video items.
    Videos,
    /// Soft-deleted items pending permanent clearance.
    Recycle,
}

impl AlbumKind {
    /// Check if this is a user-created album.
    pub fn is_user(&self) -> bool {
        matches!(self, AlbumKind::User)
    }

    /// Check if this is the recycle album.
    pub fn is_recycle(&self) -> bool {
        matches!(self, AlbumKind::Recycle)
    }
}

/// A named grouping of media items.
///
/// Descriptors are read by the UI layer and mutated only through the
/// operation strategies, never in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumDescriptor {
    /// Store-assigned identifier.
    pub id: AlbumId,

    /// User-visible album name.
    pub display_name: CompactString,

    /// Number of items currently in the album.
    pub item_count: usize,

    /// Storage location backing the album.
    pub path: PathBuf,

    /// Selection filter type.
    pub kind: AlbumKind,

    /// Owning device, if the album lives on external storage.
    pub device_id: Option<CompactString>,
}

impl AlbumDescriptor {
    /// Create a descriptor for a local album with no items yet.
    pub fn new(
        id: impl Into<CompactString>,
        display_name: impl Into<CompactString>,
        path: impl Into<PathBuf>,
        kind: AlbumKind,
    ) -> Self {
        Self {
            id: AlbumId::new(id),
            display_name: display_name.into(),
            item_count: 0,
            path: path.into(),
            kind,
            device_id: None,
        }
    }

    /// Set the item count.
    pub fn with_item_count(mut self, count: usize) -> Self {
        self.item_count = count;
        self
    }

    /// Set the owning device.
    pub fn with_device(mut self, device_id: impl Into<CompactString>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }
}

/// Query filter for album lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlbumFilter {
    /// Match a single album by identifier.
    Id(AlbumId),
    /// Match a single album by exact storage path.
    Path(PathBuf),
    /// Match all albums directly under a parent path.
    ChildrenOf(PathBuf),
}

impl AlbumFilter {
    /// Check whether a descriptor satisfies this filter.
    ///
    /// Store implementations are free to evaluate filters natively; this
    /// is the reference semantics they must agree with.
    pub fn matches(&self, album: &AlbumDescriptor) -> bool {
        match self {
            AlbumFilter::Id(id) => album.id == *id,
            AlbumFilter::Path(path) => album.path == *path,
            AlbumFilter::ChildrenOf(parent) => album.path.parent() == Some(parent.as_path()),
        }
    }
}

/// Convenience for building a child-of filter from a root path.
pub fn children_of(root: impl AsRef<Path>) -> AlbumFilter {
    AlbumFilter::ChildrenOf(root.as_ref().to_path_buf())
}
