use crate::upload::UploadEvent;
use std::sync::mpsc::Receiver;

/// Lifecycle of one submission attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BatchPhase {
    #[default]
    Idle,
    Submitting,
    AllSucceeded,
    /// Entered on the first per-file failure; the rest of the batch is
    /// not attempted and the queue is left intact for a retry.
    Aborted,
}

#[derive(Clone, Debug)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

/// Mutable state of the current (or last) submission attempt, owned by
/// the UI controller and fed by the sender thread's event channel.
#[derive(Default)]
pub struct SubmitState {
    pub phase: BatchPhase,
    /// Percentages parallel to the visible queue rows, 0.0..=100.0.
    pub row_progress: Vec<f32>,
    pub completed: usize,
    pub total: usize,
    pub message: Option<StatusMessage>,
    pub event_receiver: Option<Receiver<UploadEvent>>,
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        self.phase == BatchPhase::Submitting
    }

    /// Arms the state for a new attempt over `total` files.
    pub fn begin(&mut self, total: usize, receiver: Receiver<UploadEvent>) {
        self.phase = BatchPhase::Submitting;
        self.row_progress = vec![0.0; total];
        self.completed = 0;
        self.total = total;
        self.message = None;
        self.event_receiver = Some(receiver);
    }

    /// Progress bars never move backwards within an attempt.
    pub fn set_progress(&mut self, index: usize, percent: f32) {
        if let Some(slot) = self.row_progress.get_mut(index) {
            *slot = slot.max(percent.clamp(0.0, 100.0));
        }
    }

    /// Resizes the row progress to match the visible queue after an add
    /// or remove, zeroing every indicator.
    pub fn reset_rows(&mut self, len: usize) {
        self.row_progress = vec![0.0; len];
    }
}
