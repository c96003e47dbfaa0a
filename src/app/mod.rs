mod state;
mod ui;


pub use state::{BatchPhase, StatusMessage, SubmitState};

use crate::upload::{BatchSender, PendingFile, UploadEvent, UploadQueue};
use eframe::{egui, App};
use std::path::PathBuf;
use std::sync::mpsc as std_mpsc;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// UI controller. Owns the pending-file queue and the per-attempt state;
/// everything the rendering layer shows goes through these two.
pub struct DropshipApp {
    server_url: String,
    queue: UploadQueue,
    state: SubmitState,
}

impl DropshipApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_server_url(DEFAULT_SERVER_URL)
    }

    pub fn with_server_url(server_url: &str) -> Self {
        Self {
            server_url: server_url.to_string(),
            queue: UploadQueue::default(),
            state: SubmitState::default(),
        }
    }

    /// Reads each picked path into memory and queues it. Unreadable files
    /// are reported on the message line and skipped.
    pub fn add_paths(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        let mut picked = Vec::new();
        for path in paths {
            let Some(name) = path.file_name().and_then(|n| n.to_str()).map(String::from) else {
                continue;
            };
            match std::fs::read(&path) {
                Ok(bytes) => picked.push(PendingFile::new(name, bytes)),
                Err(e) => {
                    println!("Could not read {}: {}", path.display(), e);
                    self.state.message =
                        Some(StatusMessage::Error(format!("Could not read {}", name)));
                }
            }
        }
        self.add_files(picked);
    }

    /// Appends non-duplicate candidates; a duplicate (name, size) pair is
    /// a silent no-op. Ignored entirely while a submission is running.
    pub fn add_files(&mut self, candidates: Vec<PendingFile>) {
        if self.state.is_submitting() {
            return;
        }
        self.queue.add_files(candidates);
        self.state.reset_rows(self.queue.len());
    }

    pub fn remove_file(&mut self, index: usize) {
        if self.state.is_submitting() {
            return;
        }
        self.queue.remove_file(index);
        self.state.reset_rows(self.queue.len());
    }

    /// Kicks off one submission attempt. An empty queue fails fast with a
    /// validation message and no network activity; otherwise a worker
    /// thread sends the batch snapshot sequentially and streams events
    /// back over the channel drained in `poll_events`.
    pub fn submit(&mut self) {
        if self.state.is_submitting() {
            return;
        }
        if self.queue.is_empty() {
            self.state.message = Some(StatusMessage::Error(
                "Please select at least one file.".to_string(),
            ));
            return;
        }

        let batch = self.queue.snapshot();
        let (sender, receiver) = std_mpsc::channel();
        self.state.begin(batch.len(), receiver);

        println!("Submitting {} file(s)", batch.len());
        let batch_sender = BatchSender::new(&self.server_url);

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                batch_sender.send_batch(&batch, &sender).await;
            });
        });
    }

    /// Drains the event channel, updating progress rows and resolving the
    /// attempt when a terminal event arrives. All-success clears the
    /// queue; a failure preserves it so the user can retry.
    pub fn poll_events(&mut self, ctx: &egui::Context) {
        let Some(receiver) = self.state.event_receiver.take() else {
            return;
        };
        ctx.request_repaint();

        let mut terminal = false;
        while let Ok(event) = receiver.try_recv() {
            match event {
                UploadEvent::Progress { index, percent } => {
                    self.state.set_progress(index, percent);
                }
                UploadEvent::Done { index, stored_name } => {
                    self.state.set_progress(index, 100.0);
                    self.state.completed += 1;
                    if let Some(file) = self.queue.files().get(index) {
                        println!("Uploaded {} as {}", file.name, stored_name);
                    }
                    if self.state.completed >= self.state.total {
                        self.state.phase = BatchPhase::AllSucceeded;
                        self.state.message = Some(StatusMessage::Success(
                            "All files uploaded successfully!".to_string(),
                        ));
                        terminal = true;
                    }
                }
                UploadEvent::Failed { index, error } => {
                    println!("Upload of file #{} failed: {}", index + 1, error);
                    self.state.phase = BatchPhase::Aborted;
                    self.state.message =
                        Some(StatusMessage::Error("Error uploading files.".to_string()));
                    terminal = true;
                }
            }
        }

        if terminal {
            if self.state.phase == BatchPhase::AllSucceeded {
                self.queue.clear();
                self.state.reset_rows(0);
            }
        } else {
            self.state.event_receiver = Some(receiver);
        }
    }
}

impl App for DropshipApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_events(ctx);
        self.render(ctx);
    }
}
