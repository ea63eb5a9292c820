//! RunHandler trait with no-op defaults.

use std::path::Path;

use crate::errors::FileProcessingError;
use crate::processor::ProcessedFile;
use crate::runner::RunReport;

/// Receives run events in traversal order.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about.
pub trait RunHandler {
    fn on_run_started(&self, _target_dir: &Path, _file_count: usize) {}
    fn on_file_processed(&self, _file: &ProcessedFile) {}
    fn on_file_failed(&self, _error: &FileProcessingError) {}
    fn on_run_complete(&self, _report: &RunReport) {}
}

/// Handler that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHandler;

impl RunHandler for NoopHandler {}
