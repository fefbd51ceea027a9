//! Media item types.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Unique identifier for a media item within the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaItemId(pub CompactString);

impl MediaItemId {
    /// Create a new MediaItemId from a string-ish value.
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MediaItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single photo or video as seen by the mutation engine.
///
/// The engine never inspects pixel data; an item is an opaque handle
/// that the store knows how to trash or recover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Store-assigned identifier.
    pub id: MediaItemId,

    /// User-visible name, shown in dialogs and logs.
    pub display_name: CompactString,
}

impl MediaItem {
    /// Create a new media item handle.
    pub fn new(id: impl Into<CompactString>, display_name: impl Into<CompactString>) -> Self {
        Self {
            id: MediaItemId::new(id),
            display_name: display_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_display() {
        let id = MediaItemId::new("media/42");
        assert_eq!(id.as_str(), "media/42");
        assert_eq!(id.to_string(), "media/42");
    }

    #[test]
    fn test_item_creation() {
        let item = MediaItem::new("media/1", "IMG_0001.jpg");
        assert_eq!(item.id, MediaItemId::new("media/1"));
        assert_eq!(item.display_name, "IMG_0001.jpg");
    }
}
