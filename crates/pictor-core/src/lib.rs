//! Core types and contracts for the pictor gallery engine.
//!
//! This crate provides the domain model shared across the pictor
//! ecosystem, plus the contracts the mutation engine consumes: the
//! event bus, the selection view-model and the media store.

mod album;
mod error;
mod event;
mod item;
mod selection;
mod store;

pub use album::{AlbumDescriptor, AlbumFilter, AlbumId, AlbumKind, children_of};
pub use error::StoreError;
pub use event::{
    ChannelBus, ConfirmMessage, Confirmation, EventBus, GalleryEvent, Navigator, OperationKind,
    ProgressUpdate, Reply,
};
pub use item::{MediaItem, MediaItemId};
pub use selection::SelectionSource;
pub use store::MediaStore;
