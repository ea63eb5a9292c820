//! Top-level decomment configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ScanConfig;
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

pub const ENV_TARGET_DIR: &str = "DECOMMENT_TARGET_DIR";
pub const ENV_EXTENSION: &str = "DECOMMENT_EXTENSION";
pub const ENV_FOLLOW_SYMLINKS: &str = "DECOMMENT_FOLLOW_SYMLINKS";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`DECOMMENT_*`)
/// 2. Project config (`decomment.toml` in the base directory)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DecommentConfig {
    pub scan: ScanConfig,
}

impl DecommentConfig {
    /// Load configuration with layered resolution. `base` is the directory
    /// holding `decomment.toml`, normally the executable's directory.
    pub fn load(base: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 2: project config
        let project_config_path = base.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 1 (highest priority): environment variables
        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: PathBuf::from("<string>"),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &DecommentConfig) -> Result<(), ConfigError> {
        if let Some(ref ext) = config.scan.extension {
            if ext.trim_start_matches('.').is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.extension".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref dir) = config.scan.target_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.target_dir".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut DecommentConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let file_config: DecommentConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut DecommentConfig, other: &DecommentConfig) {
        if other.scan.target_dir.is_some() {
            base.scan.target_dir = other.scan.target_dir.clone();
        }
        if other.scan.extension.is_some() {
            base.scan.extension = other.scan.extension.clone();
        }
        if other.scan.follow_symlinks.is_some() {
            base.scan.follow_symlinks = other.scan.follow_symlinks;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(config: &mut DecommentConfig) {
        if let Ok(val) = std::env::var(ENV_TARGET_DIR) {
            config.scan.target_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var(ENV_EXTENSION) {
            config.scan.extension = Some(val);
        }
        if let Ok(val) = std::env::var(ENV_FOLLOW_SYMLINKS) {
            if let Ok(v) = val.parse::<bool>() {
                config.scan.follow_symlinks = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: PathBuf::from("<serialization>"),
            message: e.to_string(),
        })
    }
}
