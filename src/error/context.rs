//! Error context utilities
//!
//! Helpers for attaching context to errors.

use std::path::Path;

use crate::error::{Result, ScanError};

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;

    /// Add file context to an error
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| ScanError::Scan {
            message: format!("{}: {}", context(), err),
        })
    }

    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| {
            let path = path.as_ref().to_path_buf();
            let io_kind = (&err as &dyn std::error::Error)
                .downcast_ref::<std::io::Error>()
                .map(|io_err| io_err.kind());

            match io_kind {
                Some(std::io::ErrorKind::PermissionDenied) => ScanError::PermissionDenied { path },
                Some(std::io::ErrorKind::NotFound) => ScanError::InvalidPath { path },
                _ => ScanError::DirectoryTraversal {
                    path,
                    message: err.to_string(),
                },
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_with_context() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "file not found"));

        match result.with_context(|| "Failed to read source") {
            Err(ScanError::Scan { message }) => {
                assert!(message.contains("Failed to read source"));
                assert!(message.contains("file not found"));
            }
            other => panic!("Expected Scan error, got {:?}", other),
        }
    }

    #[test]
    fn test_with_file_context_not_found() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "file not found"));

        match result.with_file_context("src/App.jsx") {
            Err(ScanError::InvalidPath { path }) => {
                assert_eq!(path.to_string_lossy(), "src/App.jsx");
            }
            other => panic!("Expected InvalidPath error, got {:?}", other),
        }
    }

    #[test]
    fn test_with_file_context_permission_denied() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));

        match result.with_file_context("src/App.jsx") {
            Err(ScanError::PermissionDenied { path }) => {
                assert_eq!(path.to_string_lossy(), "src/App.jsx");
            }
            other => panic!("Expected PermissionDenied error, got {:?}", other),
        }
    }

    #[test]
    fn test_with_file_context_other_error() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::other("disk on fire"));

        match result.with_file_context("src") {
            Err(ScanError::DirectoryTraversal { path, message }) => {
                assert_eq!(path.to_string_lossy(), "src");
                assert!(message.contains("disk on fire"));
            }
            other => panic!("Expected DirectoryTraversal error, got {:?}", other),
        }
    }
}
