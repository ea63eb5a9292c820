//! Scan configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EXTENSION, DEFAULT_TARGET_DIR};

/// Configuration for file discovery.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory to rewrite. Relative paths resolve against the base
    /// directory. Default: `lib/lib_admin`.
    pub target_dir: Option<PathBuf>,
    /// File extension to match, with or without the leading dot. Default: `dart`.
    pub extension: Option<String>,
    /// Follow symbolic links while walking. Default: false.
    pub follow_symlinks: Option<bool>,
}

impl ScanConfig {
    /// Returns the effective target directory, defaulting to `lib/lib_admin`.
    pub fn effective_target_dir(&self) -> PathBuf {
        self.target_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET_DIR))
    }

    /// Returns the effective extension without its leading dot, defaulting to `dart`.
    pub fn effective_extension(&self) -> &str {
        self.extension
            .as_deref()
            .map(|ext| ext.trim_start_matches('.'))
            .unwrap_or(DEFAULT_EXTENSION)
    }

    /// Returns whether symlinks are followed, defaulting to false.
    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }

    /// Joins the target directory onto `base` unless it is already absolute.
    pub fn resolve_target_dir(&self, base: &Path) -> PathBuf {
        let target = self.effective_target_dir();
        if target.is_absolute() {
            target
        } else {
            base.join(target)
        }
    }
}
