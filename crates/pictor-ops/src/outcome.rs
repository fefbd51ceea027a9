//! Run outcome and handle types.

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

/// Terminal accounting for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// An item mutation or commit failed.
    pub has_error: bool,
    /// Items mutated successfully before the run ended.
    pub succeeded: usize,
    /// Items the run set out to mutate.
    pub requested: usize,
}

impl RunOutcome {
    /// Check if every requested item was mutated.
    pub fn is_success(&self) -> bool {
        !self.has_error && self.succeeded == self.requested
    }

    /// Get a human-readable summary of the run.
    pub fn summary(&self) -> String {
        if self.is_success() {
            format!("{} items done", self.succeeded)
        } else if self.has_error {
            format!("{} of {} items done, with errors", self.succeeded, self.requested)
        } else {
            format!("{} of {} items done", self.succeeded, self.requested)
        }
    }
}

/// Cancel and pause switchboard for a running operation.
///
/// Cloneable so a host can keep signalling power while awaiting the
/// outcome. Both signals are one-way latches observed at batch
/// boundaries; an in-flight mutation always settles first.
#[derive(Debug, Clone)]
pub struct RunController {
    cancel: CancellationToken,
    pause: CancellationToken,
}

impl RunController {
    /// Request cancellation at the next batch boundary.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Request a pause once the in-flight item settles. A paused run
    /// holds its counters until it is cancelled.
    pub fn pause(&self) {
        self.pause.cancel();
    }
}

/// Caller's side of one spawned operation.
///
/// Dropping the handle does not stop the run; the spawned task drives
/// it to a terminal state either way.
pub struct OperationHandle {
    controller: RunController,
    outcome: oneshot::Receiver<RunOutcome>,
}

impl OperationHandle {
    /// Create a handle plus the signal bundle the run task keeps.
    pub(crate) fn channel() -> (Self, RunSignals) {
        let cancel = CancellationToken::new();
        let pause = CancellationToken::new();
        let (outcome_tx, outcome_rx) = oneshot::channel();
        (
            Self {
                controller: RunController {
                    cancel: cancel.clone(),
                    pause: pause.clone(),
                },
                outcome: outcome_rx,
            },
            RunSignals {
                cancel,
                pause,
                outcome: outcome_tx,
            },
        )
    }

    /// Handle for an operation rejected before anything ran.
    pub(crate) fn unstarted() -> Self {
        Self::channel().0
    }

    /// Request cancellation at the next batch boundary.
    pub fn cancel(&self) {
        self.controller.cancel();
    }

    /// Request a pause once the in-flight item settles.
    pub fn pause(&self) {
        self.controller.pause();
    }

    /// Get a cloneable cancel/pause controller.
    pub fn controller(&self) -> RunController {
        self.controller.clone()
    }

    /// Wait for the run to end.
    ///
    /// `None` means the run never started: validation failed, the user
    /// dismissed a dialog, or a name conflict aborted the flow before
    /// any mutation.
    pub async fn outcome(self) -> Option<RunOutcome> {
        self.outcome.await.ok()
    }
}

impl std::fmt::Debug for OperationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationHandle")
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}

/// Run task's side of the handle.
pub(crate) struct RunSignals {
    pub(crate) cancel: CancellationToken,
    pub(crate) pause: CancellationToken,
    outcome: oneshot::Sender<RunOutcome>,
}

impl RunSignals {
    /// Resolve the outcome. A dropped handle just discards it.
    pub(crate) fn finish(self, outcome: RunOutcome) {
        let _ = self.outcome.send(outcome);
    }
}
