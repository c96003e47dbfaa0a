use std::collections::HashSet;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration for the server binary, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Flat directory uploads are written into.
    pub upload_dir: PathBuf,
    /// Directory of static assets served at `/`.
    pub static_dir: PathBuf,
    /// Content types the ingestion endpoint accepts.
    pub allowed_types: HashSet<String>,
}

impl ServerConfig {
    /// `PORT` overrides the listening port; everything else uses the
    /// defaults relative to the working directory.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            upload_dir: PathBuf::from("uploads"),
            static_dir: PathBuf::from("public"),
            allowed_types: default_allowed_types(),
        }
    }
}

pub fn default_allowed_types() -> HashSet<String> {
    [
        "image/jpeg",
        "image/png",
        "application/pdf",
        "application/msword",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
