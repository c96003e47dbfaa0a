use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// A user-selected file that has not been submitted yet.
///
/// The bytes are read into memory when the file is picked, so editing the
/// source file on disk afterwards does not change what gets uploaded.
#[derive(Debug, Clone)]
pub struct PendingFile {
    pub name: String,
    pub size: u64,
    pub data: Arc<Vec<u8>>,
}

impl PendingFile {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        let data = Arc::new(data);
        Self {
            name: name.into(),
            size: data.len() as u64,
            data,
        }
    }

    /// Content type declared to the server, derived from the file
    /// extension. Unknown extensions go out as `application/octet-stream`
    /// and get rejected server-side.
    pub fn content_type(&self) -> &'static str {
        let extension = Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("pdf") => "application/pdf",
            Some("doc") => "application/msword",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            _ => "application/octet-stream",
        }
    }
}

/// Events emitted by the sender task during one submission attempt,
/// delivered to the UI thread over an mpsc channel. `index` refers to the
/// position of the file in the batch snapshot.
#[derive(Debug, Clone)]
pub enum UploadEvent {
    /// Cumulative byte progress for the in-flight file, 0.0..=100.0.
    Progress { index: usize, percent: f32 },
    /// The server accepted the file and returned its stored name.
    Done { index: usize, stored_name: String },
    /// Terminal failure; files after `index` were not attempted.
    Failed { index: usize, error: String },
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upload rejected with status {status}: {reason}")]
    Rejected { status: u16, reason: String },
}
