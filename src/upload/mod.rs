mod queue;
mod sender;
mod types;

mod tests;

pub use queue::UploadQueue;
pub use sender::BatchSender;
pub use types::{PendingFile, UploadError, UploadEvent};
