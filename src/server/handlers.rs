use super::store::DiskStore;
use axum::extract::{Extension, Multipart};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct UploadResponse {
    pub filename: String,
}

/// `POST /upload`: accepts exactly one `file` field per request.
///
/// The declared content type is checked against the allow-list before the
/// field body is read, so a rejected upload never touches the disk.
pub async fn handle_upload(
    Extension(store): Extension<Arc<DiskStore>>,
    mut multipart: Multipart,
) -> Response {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                return (
                    StatusCode::BAD_REQUEST,
                    format!("Malformed multipart body: {}", err),
                )
                    .into_response();
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        if !store.is_allowed(&mime_type) {
            tracing::warn!(name = %original_name, mime = %mime_type, "rejected upload");
            return (
                StatusCode::BAD_REQUEST,
                "Unsupported file type".to_string(),
            )
                .into_response();
        }

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                return (
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read upload: {}", err),
                )
                    .into_response();
            }
        };

        return match store.store(&original_name, &mime_type, &bytes).await {
            Ok(stored) => (
                StatusCode::OK,
                Json(UploadResponse {
                    filename: stored.stored_name,
                }),
            )
                .into_response(),
            Err(err) => {
                tracing::error!(name = %original_name, error = %err, "disk write failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to store file".to_string(),
                )
                    .into_response()
            }
        };
    }

    (
        StatusCode::BAD_REQUEST,
        "No file uploaded or invalid file type.".to_string(),
    )
        .into_response()
}
