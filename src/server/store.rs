use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// On-disk artifact created by a successful ingestion.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub original_name: String,
    pub stored_name: String,
    pub mime_type: String,
    pub byte_size: u64,
    pub path: PathBuf,
}

/// Flat-directory file store guarded by a content-type allow-list.
///
/// The allow-list is injected at construction, so tests and deployments
/// can accept a different set of types without touching the handler.
pub struct DiskStore {
    root: PathBuf,
    allowed_types: HashSet<String>,
}

impl DiskStore {
    /// Opens the store, creating the upload directory if it does not
    /// exist yet. Called once at startup, not per request.
    pub fn open(root: impl Into<PathBuf>, allowed_types: HashSet<String>) -> std::io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            allowed_types,
        })
    }

    pub fn is_allowed(&self, mime_type: &str) -> bool {
        self.allowed_types.contains(mime_type)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes the bytes under `<unix_millis>-<original_name>`.
    ///
    /// Two identically named files stored within the same millisecond
    /// would collide; the window is accepted for compatibility with the
    /// naming scheme clients already rely on.
    pub async fn store(
        &self,
        original_name: &str,
        mime_type: &str,
        bytes: &[u8],
    ) -> std::io::Result<StoredFile> {
        // Keep only the final path component of whatever name the client
        // declared, so an upload can never escape the directory.
        let base_name = Path::new(original_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload");

        let stored_name = format!("{}-{}", unix_millis(), base_name);
        let path = self.root.join(&stored_name);
        tokio::fs::write(&path, bytes).await?;

        tracing::info!(name = %stored_name, size = bytes.len(), "stored upload");

        Ok(StoredFile {
            original_name: original_name.to_string(),
            stored_name,
            mime_type: mime_type.to_string(),
            byte_size: bytes.len() as u64,
            path,
        })
    }
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
