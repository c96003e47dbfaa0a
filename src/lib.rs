//! Dropship: a desktop file uploader and its ingestion server.
//!
//! The crate holds both halves of the system:
//!
//! - **`upload`**: the client core. An ordered, deduplicated queue of
//!   pending files and a sender that submits them one at a time with
//!   byte-level progress events.
//! - **`app`**: the egui front end that owns the queue, drives
//!   submission on a worker thread, and renders per-file progress.
//! - **`server`**: the axum endpoint that validates each upload against
//!   a content-type allow-list and writes it to a flat directory under a
//!   timestamp-prefixed name.

pub mod app;
pub mod server;
pub mod upload;
pub mod utils;
