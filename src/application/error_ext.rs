//! Error conversion helpers for input I/O
//!
//! Provides an extension trait for attaching the input location to I/O errors.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// input.read_file(&path)
    ///     .with_path_context("read sequence", &path)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;

    /// Add context for input that has no path, e.g. stdin.
    fn with_context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{}: {}", action, path.display()),
            source: Box::new(e),
        })
    }

    fn with_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: action.to_string(),
            source: Box::new(e),
        })
    }
}
