//! Create-album operation.

use compact_str::CompactString;
use pictor_core::{AlbumDescriptor, AlbumFilter, GalleryEvent, Reply, children_of};
use tracing::{error, info, warn};

use crate::context::{OperationContext, OperationOrigin};
use crate::name_alloc::allocate_album_name;
use crate::outcome::{OperationHandle, RunOutcome, RunSignals};

/// Start the async create-album flow.
///
/// Proposes an allocated `prefix<N>` name through the name dialog,
/// checks the answered name for collisions, creates the album, then
/// either applies it in place (album view origin) or hands it to the
/// navigator's picker. The handle resolves no outcome when the dialog
/// is dismissed or the name is already taken.
pub fn start_create_album(ctx: OperationContext<AlbumDescriptor>) -> OperationHandle {
    let (handle, signals) = OperationHandle::channel();
    tokio::spawn(create_impl(ctx, signals));
    handle
}

async fn create_impl(mut ctx: OperationContext<AlbumDescriptor>, signals: RunSignals) {
    let root = match ctx.store.albums_root().await {
        Ok(root) => root,
        Err(err) => {
            error!(error = %err, "albums root lookup failed");
            return;
        }
    };
    let siblings = match ctx.store.query_albums(&children_of(&root)).await {
        Ok(albums) => albums,
        Err(err) => {
            error!(error = %err, "sibling album query failed");
            return;
        }
    };

    let candidate = allocate_album_name(
        ctx.album_prefix.as_str(),
        siblings.iter().map(|album| album.display_name.as_str()),
    );
    info!(default_name = %candidate, "proposing album name");

    let (reply, answer) = Reply::channel();
    ctx.bus.publish(GalleryEvent::AlbumNameRequest {
        default_name: candidate.clone(),
        reply,
    });
    let name: CompactString = match answer.await {
        Ok(Some(name)) => name,
        Ok(None) => candidate,
        Err(_) => {
            info!("create album dismissed");
            return;
        }
    };

    // The user may have typed any name; collision-check it exactly.
    let target_path = root.join(name.as_str());
    match ctx.store.query_albums(&AlbumFilter::Path(target_path)).await {
        Ok(existing) if !existing.is_empty() => {
            warn!(name = %name, "album name already in use");
            ctx.bus.publish(GalleryEvent::NameConflict { name });
            return;
        }
        Ok(_) => {}
        Err(err) => {
            error!(error = %err, "album existence check failed");
            return;
        }
    }

    ctx.fire_on_start();

    let album = match ctx.store.create_album(&root, name.as_str()).await {
        Ok(album) => album,
        Err(err) => {
            error!(name = %name, error = %err, "create album failed");
            signals.finish(RunOutcome {
                has_error: true,
                succeeded: 0,
                requested: 1,
            });
            return;
        }
    };
    info!(album = %album.id, name = %album.display_name, "album created");

    if ctx.origin == OperationOrigin::AlbumView {
        // Apply in place and wait for the view to finish with it.
        let (done, applied) = Reply::channel();
        ctx.bus.publish(GalleryEvent::AlbumApply { album, done });
        let _ = applied.await;
    } else if let Some(navigator) = ctx.navigator.as_ref() {
        navigator.open_album_picker(&album);
    } else {
        warn!("no navigator configured, skipping album picker");
    }

    signals.finish(RunOutcome {
        has_error: false,
        succeeded: 1,
        requested: 1,
    });
}
