//! Rename-album operation.

use compact_str::CompactString;
use pictor_core::{AlbumDescriptor, AlbumFilter, GalleryEvent, Reply};
use tracing::{error, info, warn};

use crate::context::OperationContext;
use crate::outcome::{OperationHandle, RunOutcome, RunSignals};

/// Start the async rename-album flow.
///
/// Requires exactly one selected album; any other cardinality is
/// rejected before a dialog shows. The backing album is re-queried
/// after the dialog, so a rename of an album that vanished meanwhile
/// reports failure without committing anything.
pub fn start_rename_album(ctx: OperationContext<AlbumDescriptor>) -> OperationHandle {
    let count = ctx.selected_count();
    if count != 1 {
        warn!(count, "rename requires exactly one selected album");
        return OperationHandle::unstarted();
    }

    let (handle, signals) = OperationHandle::channel();
    tokio::spawn(rename_impl(ctx, signals));
    handle
}

async fn rename_impl(mut ctx: OperationContext<AlbumDescriptor>, signals: RunSignals) {
    let Some(album) = ctx.take_selected().into_iter().next() else {
        warn!("selection vanished before rename started");
        return;
    };
    info!(album = %album.id, name = %album.display_name, "rename requested");

    let (reply, answer) = Reply::channel();
    ctx.bus.publish(GalleryEvent::RenameRequest {
        current_name: album.display_name.clone(),
        reply,
    });
    let new_name: CompactString = match answer.await {
        Ok(Some(name)) => name,
        Ok(None) => album.display_name.clone(),
        Err(_) => {
            info!("rename dismissed");
            return;
        }
    };

    ctx.fire_on_start();

    // The album may have moved or vanished while the dialog was up.
    let found = match ctx.store.query_albums(&AlbumFilter::Id(album.id.clone())).await {
        Ok(mut albums) if !albums.is_empty() => albums.remove(0),
        Ok(_) => {
            warn!(album = %album.id, "rename target vanished on re-query");
            ctx.bus.publish(GalleryEvent::NameConflict { name: new_name });
            signals.finish(RunOutcome {
                has_error: false,
                succeeded: 0,
                requested: 1,
            });
            return;
        }
        Err(err) => {
            error!(album = %album.id, error = %err, "rename re-query failed");
            signals.finish(RunOutcome {
                has_error: true,
                succeeded: 0,
                requested: 1,
            });
            return;
        }
    };

    match ctx.store.rename_album(&found.id, new_name.as_str()).await {
        Ok(()) => {
            info!(album = %found.id, name = %new_name, "album renamed");
            signals.finish(RunOutcome {
                has_error: false,
                succeeded: 1,
                requested: 1,
            });
        }
        Err(err) => {
            error!(album = %found.id, error = %err, "rename commit failed");
            signals.finish(RunOutcome {
                has_error: true,
                succeeded: 0,
                requested: 1,
            });
        }
    }
}
