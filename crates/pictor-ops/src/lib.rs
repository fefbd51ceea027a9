//! Batch mutation engine for pictor.
//!
//! This crate provides async gallery mutations (delete, clear recycle,
//! recover, create album, rename album) with confirmation dialogs and
//! progress reporting over the gallery event bus. Each `start_*` entry
//! point validates the request, spawns the operation onto the runtime
//! and returns an [`OperationHandle`] for cancel, pause and outcome.

mod clear;
mod context;
mod create_album;
mod delete;
mod engine;
mod name_alloc;
mod outcome;
mod recover;
mod rename_album;

pub use clear::start_clear_recycle;
pub use context::{OperationContext, OperationOrigin};
pub use create_album::start_create_album;
pub use delete::start_batch_delete;
pub use engine::{ItemMutation, RunPhase, RunState, BATCH_SIZE, MAX_PROGRESS};
pub use name_alloc::allocate_album_name;
pub use outcome::{OperationHandle, RunController, RunOutcome};
pub use recover::start_recover;
pub use rename_album::start_rename_album;
