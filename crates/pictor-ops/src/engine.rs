//! Sequential batch run state machine.
//!
//! One run is one spawned task walking the resolved target set a batch
//! at a time: mutate, fold the result, publish progress, check the
//! cancel and pause latches, continue. Batch size is fixed at one, so
//! every boundary is both a cancellation checkpoint and an accurate
//! progress reading.

use std::time::Instant;

use pictor_core::{
    ConfirmMessage, GalleryEvent, MediaItem, MediaStore, OperationKind, ProgressUpdate, Reply,
    StoreError,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::context::OperationContext;
use crate::outcome::{OperationHandle, RunOutcome, RunSignals};

/// Items mutated per loop iteration. The storage layer is strictly
/// per-item, so larger batches would only coarsen progress and
/// cancellation.
pub const BATCH_SIZE: usize = 1;

/// Progress ceiling, published once more at the end of every run.
pub const MAX_PROGRESS: u8 = 100;

/// Phase of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Created, nothing validated yet.
    Idle,
    /// Confirmation dialog is up.
    AwaitingConfirmation,
    /// Walking the target set.
    Running,
    /// Held at a batch boundary; only cancel leaves this phase.
    Paused,
    /// Cancelled at a batch boundary.
    Cancelled,
    /// An item mutation failed.
    Errored,
    /// Every batch settled successfully.
    Completed,
}

impl RunPhase {
    /// Check if the run has ended.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RunPhase::Cancelled | RunPhase::Errored | RunPhase::Completed
        )
    }

    /// The transition table. Anything not listed is invalid, including
    /// every exit from a terminal phase and any resume from `Paused`.
    pub fn can_transition(self, next: RunPhase) -> bool {
        matches!(
            (self, next),
            (RunPhase::Idle, RunPhase::AwaitingConfirmation)
                | (RunPhase::AwaitingConfirmation, RunPhase::Running)
                | (RunPhase::Running, RunPhase::Running)
                | (RunPhase::Running, RunPhase::Paused)
                | (RunPhase::Running, RunPhase::Cancelled)
                | (RunPhase::Running, RunPhase::Errored)
                | (RunPhase::Running, RunPhase::Completed)
                | (RunPhase::Paused, RunPhase::Cancelled)
        )
    }
}

/// Mutable accounting for one run. Owned by the driving task; the
/// outcome resolves exactly once when a terminal phase is reached.
#[derive(Debug)]
pub struct RunState {
    phase: RunPhase,
    total_batches: usize,
    current_batch: usize,
    success_count: usize,
    requested: usize,
    requested_at: Instant,
    started_at: Option<Instant>,
}

impl RunState {
    /// Fresh state in `Idle`.
    pub fn new() -> Self {
        Self {
            phase: RunPhase::Idle,
            total_batches: 0,
            current_batch: 0,
            success_count: 0,
            requested: 0,
            requested_at: Instant::now(),
            started_at: None,
        }
    }

    /// Apply a phase transition, rejecting anything outside the table.
    pub fn transition(&mut self, next: RunPhase) -> bool {
        if self.phase.can_transition(next) {
            self.phase = next;
            true
        } else {
            warn!(from = ?self.phase, to = ?next, "invalid phase transition rejected");
            false
        }
    }

    /// Move to `Running` with the resolved target size.
    pub fn start(&mut self, requested: usize) -> bool {
        if requested == 0 {
            warn!("refusing to start a run with no items");
            return false;
        }
        if !self.transition(RunPhase::Running) {
            return false;
        }
        self.requested = requested;
        self.total_batches = requested.div_ceil(BATCH_SIZE);
        self.started_at = Some(Instant::now());
        true
    }

    /// Fold one successfully settled batch.
    pub fn record_batch_success(&mut self) {
        self.current_batch += 1;
        self.success_count += 1;
    }

    /// Progress for the batches settled so far.
    pub fn progress_percent(&self) -> u8 {
        if self.requested == 0 {
            return MAX_PROGRESS;
        }
        let percent = MAX_PROGRESS as usize * self.current_batch * BATCH_SIZE / self.requested;
        percent.min(MAX_PROGRESS as usize) as u8
    }

    /// Terminal accounting for the outcome channel.
    pub fn outcome(&self) -> RunOutcome {
        RunOutcome {
            has_error: self.phase == RunPhase::Errored,
            succeeded: self.success_count,
            requested: self.requested,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Number of batches the run was sized for.
    pub fn total_batches(&self) -> usize {
        self.total_batches
    }

    /// Batches settled so far.
    pub fn current_batch(&self) -> usize {
        self.current_batch
    }

    /// Items mutated successfully so far.
    pub fn success_count(&self) -> usize {
        self.success_count
    }

    /// Items the run was sized for.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Milliseconds since the run entered `Running`.
    pub fn run_ms(&self) -> u128 {
        self.started_at.map(|t| t.elapsed().as_millis()).unwrap_or(0)
    }

    /// Mean milliseconds per settled batch.
    pub fn batch_avg_ms(&self) -> u128 {
        self.run_ms() / self.current_batch.max(1) as u128
    }

    /// Milliseconds since the state was created.
    pub fn age_ms(&self) -> u128 {
        self.requested_at.elapsed().as_millis()
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-item mutation a run applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemMutation {
    /// Move to the recycle album, or erase for good when `permanent`.
    Trash { permanent: bool },
    /// Restore from the recycle album.
    Recover,
}

impl ItemMutation {
    /// Apply this mutation to one item through the store.
    pub(crate) async fn apply(
        self,
        store: &dyn MediaStore,
        item: &MediaItem,
    ) -> Result<(), StoreError> {
        match self {
            ItemMutation::Trash { permanent } => store.trash(item, permanent).await,
            ItemMutation::Recover => store.recover(item).await,
        }
    }
}

/// How a batch operation picks its items from the context.
pub(crate) enum TargetScope {
    /// The selected items.
    Selected,
    /// Everything in the backing view, selection ignored.
    All,
}

/// Everything a batch operation hands the driver.
pub(crate) struct BatchRequest {
    pub(crate) kind: OperationKind,
    pub(crate) mutation: ItemMutation,
    pub(crate) message: ConfirmMessage,
    pub(crate) count: usize,
    pub(crate) scope: TargetScope,
}

/// Spawn the confirmation-gated batch run.
///
/// The caller has already validated a positive target count; the
/// returned handle resolves no outcome if the user dismisses the
/// confirmation or the target set resolves empty.
pub(crate) fn start_batch(
    ctx: OperationContext<MediaItem>,
    request: BatchRequest,
) -> OperationHandle {
    let (handle, signals) = OperationHandle::channel();
    tokio::spawn(run_batch(ctx, request, signals));
    handle
}

async fn run_batch(
    mut ctx: OperationContext<MediaItem>,
    request: BatchRequest,
    signals: RunSignals,
) {
    let mut state = RunState::new();
    if !state.transition(RunPhase::AwaitingConfirmation) {
        return;
    }

    let (reply, answer) = Reply::channel();
    ctx.bus.publish(GalleryEvent::DeleteConfirm {
        message: request.message,
        reply,
    });
    match answer.await {
        Ok(confirmation) if confirmation.is_confirmed() => {}
        _ => {
            info!(kind = %request.kind, "confirmation dismissed");
            return;
        }
    }

    ctx.fire_on_start();
    ctx.bus.publish(GalleryEvent::ProgressOpen {
        kind: request.kind,
        total: request.count,
    });

    let items = match request.scope {
        TargetScope::Selected => ctx.take_selected(),
        TargetScope::All => ctx.take_all(),
    };
    if items.is_empty() {
        warn!(kind = %request.kind, "target set resolved empty, abandoning run");
        return;
    }
    if !state.start(items.len()) {
        return;
    }
    info!(
        kind = %request.kind,
        requested = state.requested(),
        total_batches = state.total_batches(),
        "batch run started"
    );

    for item in &items {
        // Cancel wins over pause at a boundary.
        if signals.cancel.is_cancelled() {
            state.transition(RunPhase::Cancelled);
            info!(kind = %request.kind, batch = state.current_batch(), "run cancelled");
            break;
        }
        if signals.pause.is_cancelled() && state.transition(RunPhase::Paused) {
            info!(kind = %request.kind, batch = state.current_batch(), "run paused");
            signals.cancel.cancelled().await;
            state.transition(RunPhase::Cancelled);
            info!(kind = %request.kind, batch = state.current_batch(), "paused run cancelled");
            break;
        }

        match request.mutation.apply(ctx.store.as_ref(), item).await {
            Ok(()) => {
                state.record_batch_success();
                ctx.bus.publish(GalleryEvent::Progress(ProgressUpdate {
                    percent: state.progress_percent(),
                    batch: state.current_batch(),
                }));
            }
            Err(err) => {
                error!(kind = %request.kind, item = %item.id, error = %err, "item mutation failed");
                state.transition(RunPhase::Errored);
                break;
            }
        }
    }

    if state.phase() == RunPhase::Running {
        state.transition(RunPhase::Completed);
    }

    // Terminal cleanup: force the bar full, then resolve the outcome.
    ctx.bus.publish(GalleryEvent::Progress(ProgressUpdate {
        percent: MAX_PROGRESS,
        batch: state.current_batch(),
    }));
    info!(
        kind = %request.kind,
        phase = ?state.phase(),
        succeeded = state.success_count(),
        requested = state.requested(),
        run_ms = state.run_ms(),
        batch_avg_ms = state.batch_avg_ms(),
        total_ms = state.age_ms(),
        "run finished"
    );
    signals.finish(state.outcome());
}
