//! Ingestion Endpoint Tests
//!
//! Exercises `POST /upload` over a real loopback listener: acceptance and
//! on-disk layout for allowed types, rejection before any write for
//! disallowed types, and the missing-field response.

#[cfg(test)]
mod tests {
    use crate::server::{default_allowed_types, router, DiskStore};
    use std::collections::HashSet;
    use std::net::SocketAddr;
    use std::path::Path;
    use std::sync::Arc;
    use tempfile::TempDir;

    async fn spawn_server(upload_dir: &Path, allowed_types: HashSet<String>) -> SocketAddr {
        let store = Arc::new(DiskStore::open(upload_dir, allowed_types).unwrap());
        let static_dir = upload_dir.to_path_buf();
        let app = router(store, &static_dir);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn form(name: &str, mime: &str, bytes: Vec<u8>) -> reqwest::multipart::Form {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(name.to_string())
            .mime_str(mime)
            .unwrap();
        reqwest::multipart::Form::new().part("file", part)
    }

    async fn post_upload(addr: SocketAddr, form: reqwest::multipart::Form) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("http://{}/upload", addr))
            .multipart(form)
            .send()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_pdf_is_stored_with_timestamp_prefix() {
        let upload_dir = TempDir::new().unwrap();
        let addr = spawn_server(upload_dir.path(), default_allowed_types()).await;

        let content = b"%PDF-1.4 dummy report".to_vec();
        let response = post_upload(addr, form("report.pdf", "application/pdf", content.clone())).await;
        assert_eq!(response.status().as_u16(), 200);

        let body: serde_json::Value = response.json().await.unwrap();
        let filename = body["filename"].as_str().unwrap().to_string();

        // Name pattern: ^\d+-report\.pdf$
        let prefix = filename.strip_suffix("-report.pdf").unwrap();
        assert!(!prefix.is_empty());
        assert!(prefix.chars().all(|c| c.is_ascii_digit()));

        // Byte-identical on disk.
        let stored = std::fs::read(upload_dir.path().join(&filename)).unwrap();
        assert_eq!(stored, content);
    }

    #[tokio::test]
    async fn test_disallowed_type_is_rejected_without_writing() {
        let upload_dir = TempDir::new().unwrap();
        let addr = spawn_server(upload_dir.path(), default_allowed_types()).await;

        let response =
            post_upload(addr, form("virus.exe", "application/x-msdownload", b"MZ".to_vec())).await;
        assert_eq!(response.status().as_u16(), 400);
        assert_eq!(response.text().await.unwrap(), "Unsupported file type");

        // Upload directory unchanged.
        assert_eq!(std::fs::read_dir(upload_dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_missing_file_field_is_rejected() {
        let upload_dir = TempDir::new().unwrap();
        let addr = spawn_server(upload_dir.path(), default_allowed_types()).await;

        let form = reqwest::multipart::Form::new().text("comment", "no file here");
        let response = post_upload(addr, form).await;

        assert_eq!(response.status().as_u16(), 400);
        assert!(response.text().await.unwrap().contains("No file uploaded"));
    }

    #[tokio::test]
    async fn test_allow_list_is_configuration_not_hardcoded() {
        let upload_dir = TempDir::new().unwrap();
        let allowed: HashSet<String> = ["text/plain".to_string()].into_iter().collect();
        let addr = spawn_server(upload_dir.path(), allowed).await;

        // The shipped defaults no longer apply with an injected list.
        let rejected = post_upload(addr, form("report.pdf", "application/pdf", b"x".to_vec())).await;
        assert_eq!(rejected.status().as_u16(), 400);

        let accepted = post_upload(addr, form("notes.txt", "text/plain", b"hello".to_vec())).await;
        assert_eq!(accepted.status().as_u16(), 200);
    }

    #[tokio::test]
    async fn test_declared_name_is_reduced_to_its_basename() {
        let upload_dir = TempDir::new().unwrap();
        let addr = spawn_server(upload_dir.path(), default_allowed_types()).await;

        let response = post_upload(
            addr,
            form("../../escape.png", "image/png", b"png-bytes".to_vec()),
        )
        .await;
        assert_eq!(response.status().as_u16(), 200);

        let body: serde_json::Value = response.json().await.unwrap();
        let filename = body["filename"].as_str().unwrap();
        assert!(filename.ends_with("-escape.png"));
        assert!(upload_dir.path().join(filename).exists());
    }
}
