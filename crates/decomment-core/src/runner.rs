//! Batch run over a target directory.
//!
//! Files are handled one at a time, in discovery order. A failure on one file
//! is recorded and the run moves on; only a missing target directory stops
//! the run before it starts.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::DecommentConfig;
use crate::errors::{FileProcessingError, RunError};
use crate::events::RunHandler;
use crate::processor::{process_file, ProcessedFile};
use crate::scanner::Walker;

/// A file that could not be rewritten.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: FileProcessingError,
}

/// Everything that happened during one run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Resolved directory that was walked.
    pub target_dir: PathBuf,
    /// Successfully rewritten files, in processing order.
    pub processed: Vec<ProcessedFile>,
    /// Files left untouched because of an error, in processing order.
    pub failures: Vec<FileFailure>,
}

impl RunReport {
    /// Returns true if every discovered file was rewritten.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of files visited, successful or not.
    pub fn files_seen(&self) -> usize {
        self.processed.len() + self.failures.len()
    }

    /// Number of rewritten files whose content actually changed.
    pub fn files_changed(&self) -> usize {
        self.processed.iter().filter(|f| f.changed()).count()
    }
}

/// Resolve the target directory against `base` and rewrite every matching file.
pub fn run(
    config: &DecommentConfig,
    base: &Path,
    handler: &dyn RunHandler,
) -> Result<RunReport, RunError> {
    let target_dir = config.scan.resolve_target_dir(base);
    run_in(&target_dir, config, handler)
}

/// Rewrite every matching file under `target_dir`.
pub fn run_in(
    target_dir: &Path,
    config: &DecommentConfig,
    handler: &dyn RunHandler,
) -> Result<RunReport, RunError> {
    if !target_dir.exists() {
        return Err(RunError::DirectoryNotFound {
            path: target_dir.to_path_buf(),
        });
    }

    let walker = Walker::from_config(target_dir, &config.scan);
    let files = walker.discover();
    handler.on_run_started(target_dir, files.len());

    let mut report = RunReport {
        target_dir: target_dir.to_path_buf(),
        ..Default::default()
    };

    for path in files {
        match process_file(&path) {
            Ok(processed) => {
                handler.on_file_processed(&processed);
                report.processed.push(processed);
            }
            Err(error) => {
                warn!(path = %path.display(), error = %error, "file left unmodified");
                handler.on_file_failed(&error);
                report.failures.push(FileFailure { path, error });
            }
        }
    }

    info!(
        target_dir = %report.target_dir.display(),
        processed = report.processed.len(),
        changed = report.files_changed(),
        failed = report.failures.len(),
        "run complete"
    );
    handler.on_run_complete(&report);

    Ok(report)
}
