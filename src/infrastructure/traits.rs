//! I/O boundary traits for testability
//!
//! These traits abstract where sequence text comes from, allowing services
//! to be tested with in-memory implementations.

use std::io::{self, Read};
use std::path::Path;

/// Source of raw sequence text.
pub trait InputSource: Send + Sync {
    /// Read file contents to string.
    fn read_file(&self, path: &Path) -> io::Result<String>;

    /// Read all of standard input.
    fn read_stdin(&self) -> io::Result<String>;
}

/// Real implementation backed by `std::fs` and `std::io::stdin`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealInputSource;

impl InputSource for RealInputSource {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn read_stdin(&self) -> io::Result<String> {
        let mut buffer = String::new();
        io::stdin().lock().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn given_existing_file_when_reading_then_returns_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1, 3, 2").unwrap();

        let content = RealInputSource.read_file(file.path()).unwrap();
        assert_eq!(content, "1, 3, 2");
    }

    #[test]
    fn given_missing_file_when_reading_then_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = RealInputSource
            .read_file(&dir.path().join("missing.txt"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
