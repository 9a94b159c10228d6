//! Per-file read and decode.

use crate::error::SkipReason;
use crate::models::{FileOutcome, FileRecord};
use crate::scanner::{EntryKind, ScannedFile};
use std::fs;
use std::path::Path;

/// Read a scanned file into an outcome.
///
/// Special files are never opened. Everything else must have a UTF-8
/// path (it is written verbatim into the header), and is read whole and
/// must decode as UTF-8 to become an entry.
pub fn read_file(file: ScannedFile) -> FileOutcome {
    let ScannedFile { path, kind } = file;

    let result = match kind {
        EntryKind::Special => Err(SkipReason::NotRegularFile),
        EntryKind::File => read_utf8(&path),
    };

    match result {
        Ok(content) => FileOutcome::Appended(FileRecord { path, content }),
        Err(reason) => FileOutcome::Skipped { path, reason },
    }
}

fn read_utf8(path: &Path) -> Result<String, SkipReason> {
    if path.to_str().is_none() {
        return Err(SkipReason::PathNotUtf8);
    }

    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| SkipReason::NotUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn scanned(path: PathBuf) -> ScannedFile {
        ScannedFile {
            path,
            kind: EntryKind::File,
        }
    }

    #[test]
    fn test_read_utf8_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.txt");
        fs::write(&path, "héllo\r\nworld\rend").unwrap();

        match read_file(scanned(path.clone())) {
            FileOutcome::Appended(record) => {
                assert_eq!(record.path, path);
                // Line endings are kept exactly as stored.
                assert_eq!(record.content, "héllo\r\nworld\rend");
            }
            other => panic!("expected Appended, got {:?}", other),
        }
    }

    #[test]
    fn test_read_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty");
        fs::write(&path, "").unwrap();

        assert!(matches!(
            read_file(scanned(path)),
            FileOutcome::Appended(FileRecord { content, .. }) if content.is_empty()
        ));
    }

    #[test]
    fn test_invalid_utf8_is_skipped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("b.bin");
        fs::write(&path, [0x66, 0x6f, 0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(
            read_file(scanned(path)),
            FileOutcome::Skipped {
                reason: SkipReason::NotUtf8,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gone");

        match read_file(scanned(path)) {
            FileOutcome::Skipped {
                reason: SkipReason::Read(e),
                ..
            } => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected read error, got {:?}", other),
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_file_name_is_read_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join(OsStr::from_bytes(b"bad\xffname.txt"));
        fs::write(&path, "valid text").unwrap();

        let outcome = read_file(scanned(path));
        assert!(matches!(
            &outcome,
            FileOutcome::Skipped {
                reason: SkipReason::PathNotUtf8,
                ..
            }
        ));
        if let FileOutcome::Skipped { reason, .. } = outcome {
            assert!(reason.is_error());
        }
    }

    #[test]
    fn test_special_file_is_not_opened() {
        // The path does not exist; a read attempt would produce a Read error.
        let file = ScannedFile {
            path: PathBuf::from("/nonexistent/fifo"),
            kind: EntryKind::Special,
        };

        assert!(matches!(
            read_file(file),
            FileOutcome::Skipped {
                reason: SkipReason::NotRegularFile,
                ..
            }
        ));
    }
}
