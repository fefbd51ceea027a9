//! Clear-recycle operation.

use pictor_core::{ConfirmMessage, MediaItem, OperationKind};
use tracing::warn;

use crate::context::OperationContext;
use crate::engine::{self, BatchRequest, ItemMutation, TargetScope};
use crate::outcome::OperationHandle;

/// Start an async permanent clear of the recycle album.
///
/// Always operates over the full recycle contents; a partial selection
/// is ignored and the whole set goes. An empty recycle set is a no-op
/// with no dialog and no outcome.
pub fn start_clear_recycle(ctx: OperationContext<MediaItem>) -> OperationHandle {
    let count = ctx.total_count();
    if count == 0 {
        warn!("clear recycle requested with an empty recycle set");
        return OperationHandle::unstarted();
    }

    let message = if ctx.is_select_all() {
        ConfirmMessage::ClearRecycleAll
    } else {
        ConfirmMessage::ClearRecycleMany { count }
    };

    engine::start_batch(
        ctx,
        BatchRequest {
            kind: OperationKind::ClearRecycle,
            mutation: ItemMutation::Trash { permanent: true },
            message,
            count,
            scope: TargetScope::All,
        },
    )
}
