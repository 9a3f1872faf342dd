//! Append-only interaction log file

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// The on-disk interaction log.
///
/// The file is truncated once when the log is created. Every append opens the
/// file, writes, and closes it again, so no handle is held between lines.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    /// Create the file, or truncate it if it already exists
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        File::create(&path)?;
        Ok(LogFile { path })
    }

    /// Append `text` verbatim
    pub fn append(&self, text: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(text.as_bytes())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_create_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calc.log");
        fs::write(&path, "stale contents\n").unwrap();

        let log = LogFile::create(&path).unwrap();
        assert_eq!(fs::read_to_string(log.path()).unwrap(), "");
    }

    #[test]
    fn test_append_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = LogFile::create(dir.path().join("calc.log")).unwrap();

        log.append("Empty Stack\n").unwrap();
        log.append("# 3\n").unwrap();
        log.append("1: 3\n").unwrap();

        assert_eq!(
            fs::read_to_string(log.path()).unwrap(),
            "Empty Stack\n# 3\n1: 3\n"
        );
    }

    #[test]
    fn test_append_fails_when_file_removed() {
        let dir = tempfile::tempdir().unwrap();
        let log = LogFile::create(dir.path().join("calc.log")).unwrap();
        fs::remove_file(log.path()).unwrap();

        assert!(log.append("lost\n").is_err());
    }
}
