//! Upload Queue Tests
//!
//! Validates the client-side queue invariants: (name, size) uniqueness,
//! removal semantics, and the content types declared at submit time.

#[cfg(test)]
mod tests {
    use crate::upload::{PendingFile, UploadQueue};

    fn file(name: &str, bytes: &[u8]) -> PendingFile {
        PendingFile::new(name, bytes.to_vec())
    }

    #[test]
    fn test_duplicate_name_and_size_is_ignored() {
        let mut queue = UploadQueue::default();
        queue.add_files([file("notes.txt", b"abc"), file("notes.txt", b"abc")]);
        assert_eq!(queue.len(), 1);

        // Same addition again, later: still a no-op.
        queue.add_files([file("notes.txt", b"xyz")]);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_same_name_different_size_is_kept() {
        let mut queue = UploadQueue::default();
        queue.add_files([file("notes.txt", b"abc"), file("notes.txt", b"abcdef")]);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut queue = UploadQueue::default();
        queue.add_files([file("a.pdf", b"1"), file("b.png", b"22"), file("c.doc", b"333")]);

        let names: Vec<&str> = queue.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "b.png", "c.doc"]);
    }

    #[test]
    fn test_remove_excises_exactly_one_entry() {
        let mut queue = UploadQueue::default();
        queue.add_files([file("a.pdf", b"1"), file("b.png", b"22"), file("c.doc", b"333")]);

        queue.remove_file(1);

        let names: Vec<&str> = queue.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "c.doc"]);
    }

    #[test]
    fn test_remove_out_of_range_is_a_noop() {
        let mut queue = UploadQueue::default();
        queue.add_files([file("a.pdf", b"1")]);
        queue.remove_file(5);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_snapshot_matches_queue_order() {
        let mut queue = UploadQueue::default();
        queue.add_files([file("a.pdf", b"1"), file("b.png", b"22")]);

        let snapshot = queue.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].name, "a.pdf");
        assert_eq!(snapshot[1].name, "b.png");

        // Snapshot is independent of later queue edits.
        queue.clear();
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_content_type_from_extension() {
        assert_eq!(file("report.pdf", b"x").content_type(), "application/pdf");
        assert_eq!(file("photo.JPG", b"x").content_type(), "image/jpeg");
        assert_eq!(file("logo.png", b"x").content_type(), "image/png");
        assert_eq!(
            file("cv.docx", b"x").content_type(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(
            file("virus.exe", b"x").content_type(),
            "application/octet-stream"
        );
        assert_eq!(file("README", b"x").content_type(), "application/octet-stream");
    }
}
