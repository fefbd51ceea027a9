//! Typed events published by the engine toward the UI layer.
//!
//! The engine only ever publishes; it never subscribes. Dialog round
//! trips carry a one-shot [`Reply`] channel the UI answers on, so a
//! dismissed dialog is simply a dropped reply.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};

use crate::album::AlbumDescriptor;

/// The kind of operation a run is performing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationKind {
    BatchDelete,
    ClearRecycle,
    Recover,
    CreateAlbum,
    RenameAlbum,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BatchDelete => write!(f, "Delete"),
            Self::ClearRecycle => write!(f, "Clear recycle"),
            Self::Recover => write!(f, "Recover"),
            Self::CreateAlbum => write!(f, "Create album"),
            Self::RenameAlbum => write!(f, "Rename album"),
        }
    }
}

/// Progress snapshot for an ongoing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    /// Overall progress in percent, 0 to 100.
    pub percent: u8,
    /// Index of the batch that just settled (1-based).
    pub batch: usize,
}

/// Confirmation prompt shown before a destructive run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmMessage {
    /// Move one item to the recycle album.
    TrashSingle,
    /// Move a counted set of items to the recycle album.
    TrashMany { count: usize },
    /// Move everything in the view to the recycle album.
    TrashAll,
    /// Permanently clear a counted set from the recycle album.
    ClearRecycleMany { count: usize },
    /// Permanently clear the whole recycle album.
    ClearRecycleAll,
}

impl std::fmt::Display for ConfirmMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TrashSingle => write!(f, "Delete this item?"),
            Self::TrashMany { count } => write!(f, "Delete {count} items?"),
            Self::TrashAll => write!(f, "Delete all items?"),
            Self::ClearRecycleMany { count } => {
                write!(f, "Permanently delete {count} items?")
            }
            Self::ClearRecycleAll => write!(f, "Empty the recycle album?"),
        }
    }
}

/// The user's answer to a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confirmation {
    Confirmed,
    Dismissed,
}

impl Confirmation {
    /// Check if the user confirmed.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Confirmation::Confirmed)
    }
}

/// Single-use reply channel carried inside dialog events.
///
/// Dropping the reply without sending counts as dismissal; the engine
/// side observes it as a closed channel.
pub struct Reply<T>(oneshot::Sender<T>);

impl<T> Reply<T> {
    /// Create a reply and the receiver the engine awaits on.
    pub fn channel() -> (Self, oneshot::Receiver<T>) {
        let (tx, rx) = oneshot::channel();
        (Self(tx), rx)
    }

    /// Answer the dialog. Delivery is fire-and-forget; if the engine
    /// has already given up waiting the answer is discarded.
    pub fn send(self, value: T) {
        let _ = self.0.send(value);
    }
}

impl<T> std::fmt::Debug for Reply<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reply").finish_non_exhaustive()
    }
}

/// Everything the engine can tell the UI.
///
/// One variant per topic of the original broadcast bus, with payloads
/// made explicit.
#[derive(Debug)]
pub enum GalleryEvent {
    /// Ask the user to confirm a destructive batch run.
    DeleteConfirm {
        message: ConfirmMessage,
        reply: Reply<Confirmation>,
    },
    /// Open the modal progress dialog for a starting run.
    ProgressOpen { kind: OperationKind, total: usize },
    /// Per-item progress, published after every settled batch.
    Progress(ProgressUpdate),
    /// Ask the user to name a new album; `default_name` is the
    /// allocator's candidate. Answer `None` to keep the candidate.
    AlbumNameRequest {
        default_name: CompactString,
        reply: Reply<Option<CompactString>>,
    },
    /// Ask the user to rename an album. Answer `None` to keep the
    /// current name.
    RenameRequest {
        current_name: CompactString,
        reply: Reply<Option<CompactString>>,
    },
    /// Apply a freshly created album in place; the engine waits for
    /// the reply before reporting completion.
    AlbumApply {
        album: AlbumDescriptor,
        done: Reply<()>,
    },
    /// The media domain changed; views should re-query.
    DomainRefresh,
    /// An album name is already taken or its target vanished.
    NameConflict { name: CompactString },
}

/// Publish-only channel from the engine to the UI layer.
///
/// `publish` must not block; implementations buffer or drop.
pub trait EventBus: Send + Sync {
    /// Publish one event. Fire-and-forget.
    fn publish(&self, event: GalleryEvent);
}

/// [`EventBus`] over an unbounded channel, for hosts that drain events
/// from a UI task.
#[derive(Debug, Clone)]
pub struct ChannelBus {
    tx: mpsc::UnboundedSender<GalleryEvent>,
}

impl ChannelBus {
    /// Create the bus and the receiving end the host drains.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<GalleryEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EventBus for ChannelBus {
    fn publish(&self, event: GalleryEvent) {
        // A disconnected host just loses the event.
        let _ = self.tx.send(event);
    }
}

/// Routing seam for flows that leave the current screen.
pub trait Navigator: Send + Sync {
    /// Open the media picker for a freshly created album.
    fn open_album_picker(&self, album: &AlbumDescriptor);
}
