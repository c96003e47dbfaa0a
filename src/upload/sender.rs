use super::types::{PendingFile, UploadError, UploadEvent};
use bytes::Bytes;
use serde::Deserialize;
use std::sync::mpsc::Sender;
use std::sync::Arc;

const CHUNK_SIZE: usize = 64 * 1024;

#[derive(Deserialize)]
struct UploadResponse {
    filename: String,
}

/// Submits one batch of files to the ingestion endpoint, strictly one at
/// a time, reporting per-file progress over the event channel.
pub struct BatchSender {
    endpoint: String,
    client: reqwest::Client,
}

impl BatchSender {
    pub fn new(server_url: &str) -> Self {
        Self {
            endpoint: format!("{}/upload", server_url.trim_end_matches('/')),
            client: reqwest::Client::new(),
        }
    }

    /// Uploads the batch in queue order, awaiting each response before
    /// starting the next file. Stops at the first failure; files after it
    /// are not attempted. Returns true only if every file succeeded.
    pub async fn send_batch(&self, batch: &[PendingFile], events: &Sender<UploadEvent>) -> bool {
        for (index, file) in batch.iter().enumerate() {
            match self.send_file(index, file, events).await {
                Ok(stored_name) => {
                    events
                        .send(UploadEvent::Done { index, stored_name })
                        .unwrap_or_default();
                }
                Err(e) => {
                    events
                        .send(UploadEvent::Failed {
                            index,
                            error: e.to_string(),
                        })
                        .unwrap_or_default();
                    return false;
                }
            }
        }
        true
    }

    async fn send_file(
        &self,
        index: usize,
        file: &PendingFile,
        events: &Sender<UploadEvent>,
    ) -> Result<String, UploadError> {
        let body = progress_body(file.data.clone(), index, events.clone());
        let part = reqwest::multipart::Part::stream_with_length(body, file.size)
            .file_name(file.name.clone())
            .mime_str(file.content_type())?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                reason,
            });
        }

        let body: UploadResponse = response.json().await?;
        Ok(body.filename)
    }
}

/// Request body that reports cumulative progress as each chunk is handed
/// to the transport. The percentage never decreases. Zero-length files
/// emit no progress events; their indicator jumps to 100 on completion.
fn progress_body(
    data: Arc<Vec<u8>>,
    index: usize,
    events: Sender<UploadEvent>,
) -> reqwest::Body {
    let total = data.len();
    let chunk_count = total.div_ceil(CHUNK_SIZE);

    let stream = futures::stream::iter((0..chunk_count).map(move |i| {
        let start = i * CHUNK_SIZE;
        let end = ((i + 1) * CHUNK_SIZE).min(total);
        let chunk = Bytes::copy_from_slice(&data[start..end]);
        let percent = (end as f64 / total as f64 * 100.0) as f32;
        events
            .send(UploadEvent::Progress { index, percent })
            .unwrap_or_default();
        Ok::<_, std::io::Error>(chunk)
    }));

    reqwest::Body::wrap_stream(stream)
}
