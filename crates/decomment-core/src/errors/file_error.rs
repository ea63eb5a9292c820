//! Per-file processing errors.

use std::path::{Path, PathBuf};

use super::error_code::{self, ErrorCode};

/// Reading or writing one file failed. Never fatal to a batch run:
/// the runner records it and moves on to the next file.
#[derive(Debug, thiserror::Error)]
pub enum FileProcessingError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl FileProcessingError {
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }

    /// The underlying I/O failure, without the path prefix.
    pub fn io_error(&self) -> &std::io::Error {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => source,
        }
    }
}

impl ErrorCode for FileProcessingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Read { .. } => error_code::FILE_READ_ERROR,
            Self::Write { .. } => error_code::FILE_WRITE_ERROR,
        }
    }
}
