//! Recursive file discovery using `walkdir`.
//!
//! Directory entries that cannot be read are logged and skipped; discovery
//! never fails as a whole.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;

/// Finds every file under `root` whose name ends with `.<extension>`.
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
    suffix: String,
    follow_symlinks: bool,
}

impl Walker {
    /// Create a walker for `root` matching `extension` (leading dot optional).
    pub fn new(root: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            root: root.into(),
            suffix: format!(".{}", extension.trim_start_matches('.')),
            follow_symlinks: false,
        }
    }

    /// Create a walker from the scan section of the config.
    pub fn from_config(root: impl Into<PathBuf>, config: &ScanConfig) -> Self {
        Self::new(root, config.effective_extension())
            .follow_symlinks(config.effective_follow_symlinks())
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Collect matching files. Order is deterministic: entries are sorted by
    /// file name within each directory, parents before children.
    pub fn discover(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let walk = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name();

        for entry in walk {
            match entry {
                Ok(entry) => {
                    if self.matches(&entry) {
                        files.push(entry.into_path());
                    }
                }
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                }
            }
        }

        debug!(
            root = %self.root.display(),
            count = files.len(),
            "discovered files"
        );
        files
    }

    /// True for files with the wanted suffix. Symlinks count unless they
    /// point at a directory, so a dangling link is still handed to the
    /// processor and reported there.
    fn matches(&self, entry: &DirEntry) -> bool {
        let candidate = entry.file_type().is_file()
            || (entry.path_is_symlink() && !entry.path().is_dir());
        candidate && entry.file_name().to_string_lossy().ends_with(&self.suffix)
    }
}
