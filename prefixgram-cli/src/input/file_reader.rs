//! Corpus file access

use crate::error::CliResult;
use anyhow::Context;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Opens corpus files for line-by-line streaming
pub struct FileReader;

impl FileReader {
    /// Open a corpus file
    ///
    /// Failure is the emitter's input-unavailable error, so callers can
    /// still downcast to `prefixgram_core::CoreError`.
    pub fn open(path: &Path) -> CliResult<BufReader<File>> {
        Ok(prefixgram_core::open_input(path)?)
    }

    /// Size in bytes of an already opened corpus
    pub fn opened_size(reader: &BufReader<File>, path: &Path) -> CliResult<u64> {
        let metadata = reader
            .get_ref()
            .metadata()
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefixgram_core::CoreError;
    use std::fs::{self, File};
    use std::io::BufRead;
    use tempfile::TempDir;

    #[test]
    fn test_open_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("corpus.txt");
        fs::write(&file_path, "I am\nyou are\n").unwrap();

        let reader = FileReader::open(&file_path).unwrap();
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["I am", "you are"]);
    }

    #[test]
    fn test_open_nonexistent_file() {
        let path = Path::new("/nonexistent/corpus.txt");
        let err = FileReader::open(path).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::InputUnavailable { .. })
        ));
        assert!(err.to_string().contains("/nonexistent/corpus.txt"));
    }

    #[test]
    fn test_opened_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sized.txt");

        let content = "a ".repeat(512);
        fs::write(&file_path, &content).unwrap();

        let reader = FileReader::open(&file_path).unwrap();
        assert_eq!(FileReader::opened_size(&reader, &file_path).unwrap(), 1024);
    }

    #[test]
    fn test_opened_size_follows_open_handle() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("moved.txt");
        fs::write(&file_path, "I am\n").unwrap();

        let reader = FileReader::open(&file_path).unwrap();
        fs::remove_file(&file_path).unwrap();

        // The path is gone but the open handle still knows its length
        assert_eq!(FileReader::opened_size(&reader, &file_path).unwrap(), 5);
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        let mut reader = FileReader::open(&file_path).unwrap();
        assert!(reader.fill_buf().unwrap().is_empty());
        assert_eq!(FileReader::opened_size(&reader, &file_path).unwrap(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_open_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("no_read.txt");

        fs::write(&file_path, "content").unwrap();

        // Remove read permissions
        let metadata = fs::metadata(&file_path).unwrap();
        let mut permissions = metadata.permissions();
        permissions.set_mode(0o000);
        fs::set_permissions(&file_path, permissions).unwrap();

        // Root ignores mode bits, so only assert when the open really failed
        if let Err(err) = FileReader::open(&file_path) {
            assert!(matches!(
                err.downcast_ref::<CoreError>(),
                Some(CoreError::InputUnavailable { .. })
            ));
        }

        // Restore permissions for cleanup
        let mut permissions = fs::metadata(&file_path).unwrap().permissions();
        permissions.set_mode(0o644);
        fs::set_permissions(&file_path, permissions).unwrap();
    }
}
