//! Single-file rewrite: read, strip, write back in place.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::FileProcessingError;
use crate::stripper::strip_comments;

/// Outcome of rewriting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    pub path: PathBuf,
    pub bytes_before: usize,
    pub bytes_after: usize,
    changed: bool,
}

impl ProcessedFile {
    /// True if stripping produced different text.
    pub fn changed(&self) -> bool {
        self.changed
    }
}

/// Strip comments from `path` and overwrite it with the result.
///
/// The file is read and written as UTF-8. If reading fails (missing file,
/// permissions, invalid UTF-8) nothing is written. If writing fails the
/// original file is left exactly as it was.
pub fn process_file(path: &Path) -> Result<ProcessedFile, FileProcessingError> {
    let content = fs::read_to_string(path).map_err(|e| FileProcessingError::read(path, e))?;
    let stripped = strip_comments(&content);

    replace_contents(path, &stripped).map_err(|e| FileProcessingError::write(path, e))?;

    debug!(
        path = %path.display(),
        bytes_before = content.len(),
        bytes_after = stripped.len(),
        "stripped comments"
    );

    Ok(ProcessedFile {
        path: path.to_path_buf(),
        bytes_before: content.len(),
        bytes_after: stripped.len(),
        changed: content != stripped,
    })
}

/// Replace the contents of `path` by renaming a sibling temp file over it.
///
/// Symlinks are resolved first so the link itself survives, and the target's
/// permissions carry over to the new file. A read-only target is refused
/// because the rename alone would not notice it.
fn replace_contents(path: &Path, contents: &str) -> io::Result<()> {
    let target = fs::canonicalize(path)?;
    let permissions = fs::metadata(&target)?.permissions();
    if permissions.readonly() {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "file is read-only",
        ));
    }

    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
