//! Batch-level errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Conditions that stop a run before any file is touched.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },
}

impl ErrorCode for RunError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DirectoryNotFound { .. } => error_code::DIRECTORY_NOT_FOUND,
        }
    }
}
