//! Recover operation.

use pictor_core::{GalleryEvent, MediaItem};
use tracing::{error, info, warn};

use crate::context::OperationContext;
use crate::engine::ItemMutation;
use crate::outcome::{OperationHandle, RunOutcome, RunSignals};

/// Start an async recover of one soft-deleted item.
///
/// Not batched: exactly one selected item is required and there is no
/// confirmation dialog. The domain refresh publishes on success and
/// failure alike, so views re-query either way.
pub fn start_recover(ctx: OperationContext<MediaItem>) -> OperationHandle {
    let count = ctx.selected_count();
    if count != 1 {
        warn!(count, "recover requires exactly one selected item");
        return OperationHandle::unstarted();
    }

    let (handle, signals) = OperationHandle::channel();
    tokio::spawn(recover_impl(ctx, signals));
    handle
}

async fn recover_impl(mut ctx: OperationContext<MediaItem>, signals: RunSignals) {
    let Some(item) = ctx.take_selected().into_iter().next() else {
        warn!("selection vanished before recover started");
        return;
    };

    let has_error = match ItemMutation::Recover.apply(ctx.store.as_ref(), &item).await {
        Ok(()) => {
            info!(item = %item.id, "item recovered");
            false
        }
        Err(err) => {
            error!(item = %item.id, error = %err, "recover failed");
            true
        }
    };

    // Views re-sync regardless of the result.
    ctx.bus.publish(GalleryEvent::DomainRefresh);
    signals.finish(RunOutcome {
        has_error,
        succeeded: if has_error { 0 } else { 1 },
        requested: 1,
    });
}
