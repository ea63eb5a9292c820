//! `decomment`: strips comments from every Dart file under `lib/lib_admin`
//! (relative to the executable) and rewrites them in place.

use std::path::{Path, PathBuf};

use anyhow::Context;
use decomment_core::constants::VERSION;
use decomment_core::errors::RunError;
use decomment_core::events::RunHandler;
use decomment_core::tracing::init_tracing;
use decomment_core::{DecommentConfig, FileProcessingError, ProcessedFile, RunReport};

const DONE_LINE: &str = "Done removing comments from all files.";

fn processed_line(file: &ProcessedFile) -> String {
    format!("Processed: {}", file.path.display())
}

fn failure_line(error: &FileProcessingError) -> String {
    format!(
        "Error processing {}: {}",
        error.path().display(),
        error.io_error()
    )
}

fn not_found_line(dir: &Path) -> String {
    format!("Directory not found: {}", dir.display())
}

/// Prints one stdout line per file as the run progresses.
struct ConsoleReporter;

impl RunHandler for ConsoleReporter {
    fn on_file_processed(&self, file: &ProcessedFile) {
        println!("{}", processed_line(file));
    }

    fn on_file_failed(&self, error: &FileProcessingError) {
        println!("{}", failure_line(error));
    }

    fn on_run_complete(&self, _report: &RunReport) {
        println!("{DONE_LINE}");
    }
}

/// Directory containing the running executable.
fn base_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    let exe = exe.canonicalize().unwrap_or(exe);
    Ok(exe.parent().map(Path::to_path_buf).unwrap_or_default())
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let base = base_dir()?;
    tracing::debug!(version = VERSION, base = %base.display(), "resolved base directory");
    let config = DecommentConfig::load(&base)
        .with_context(|| format!("invalid configuration in {}", base.display()))?;

    if let Err(RunError::DirectoryNotFound { path }) =
        decomment_core::run(&config, &base, &ConsoleReporter)
    {
        println!("{}", not_found_line(&path));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn success_line_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("home.dart");
        std::fs::write(&path, "x(); // y\n").unwrap();
        let file = decomment_core::process_file(&path).unwrap();

        assert_eq!(
            processed_line(&file),
            format!("Processed: {}", path.display())
        );
    }

    #[test]
    fn failure_line_shows_path_and_cause() {
        let error = FileProcessingError::write(
            Path::new("lib/lib_admin/a.dart"),
            io::Error::new(io::ErrorKind::PermissionDenied, "file is read-only"),
        );
        assert_eq!(
            failure_line(&error),
            "Error processing lib/lib_admin/a.dart: file is read-only"
        );
    }

    #[test]
    fn closing_and_not_found_lines() {
        assert_eq!(DONE_LINE, "Done removing comments from all files.");
        assert_eq!(
            not_found_line(Path::new("/opt/app/lib/lib_admin")),
            "Directory not found: /opt/app/lib/lib_admin"
        );
    }
}
