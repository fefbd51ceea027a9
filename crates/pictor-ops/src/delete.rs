//! Batch delete operation.

use pictor_core::{ConfirmMessage, MediaItem, OperationKind};
use tracing::warn;

use crate::context::OperationContext;
use crate::engine::{self, BatchRequest, ItemMutation, TargetScope};
use crate::outcome::OperationHandle;

/// Start an async batch delete of the selected items.
///
/// Items move to the recycle album one at a time after the user
/// confirms. The handle resolves no outcome when nothing is selected
/// or the confirmation is dismissed.
pub fn start_batch_delete(ctx: OperationContext<MediaItem>) -> OperationHandle {
    let count = ctx.selected_count();
    if count == 0 {
        warn!("batch delete requested with nothing selected");
        return OperationHandle::unstarted();
    }

    let message = if ctx.is_select_all() {
        ConfirmMessage::TrashAll
    } else if count == 1 {
        ConfirmMessage::TrashSingle
    } else {
        ConfirmMessage::TrashMany { count }
    };

    engine::start_batch(
        ctx,
        BatchRequest {
            kind: OperationKind::BatchDelete,
            mutation: ItemMutation::Trash { permanent: false },
            message,
            count,
            scope: TargetScope::Selected,
        },
    )
}
