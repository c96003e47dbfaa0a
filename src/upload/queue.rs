use super::types::PendingFile;

/// Ordered set of files awaiting submission.
///
/// Insertion order is display order. No two entries ever share the same
/// `(name, size)` pair; duplicate additions are silently ignored.
#[derive(Default)]
pub struct UploadQueue {
    files: Vec<PendingFile>,
}

impl UploadQueue {
    /// Appends every candidate that is not already queued.
    pub fn add_files(&mut self, candidates: impl IntoIterator<Item = PendingFile>) {
        for candidate in candidates {
            let duplicate = self
                .files
                .iter()
                .any(|f| f.name == candidate.name && f.size == candidate.size);
            if !duplicate {
                self.files.push(candidate);
            }
        }
    }

    /// Removes the entry at `index`, preserving the order of the rest.
    /// Out-of-range indices are ignored.
    pub fn remove_file(&mut self, index: usize) {
        if index < self.files.len() {
            self.files.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[PendingFile] {
        &self.files
    }

    /// Snapshot taken at submit time. The visible queue keeps its state
    /// until the attempt resolves, so a failed batch can be retried
    /// without re-selecting files.
    pub fn snapshot(&self) -> Vec<PendingFile> {
        self.files.clone()
    }
}
