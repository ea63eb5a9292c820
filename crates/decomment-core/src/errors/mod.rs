//! Error handling for decomment.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod file_error;
pub mod run_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use file_error::FileProcessingError;
pub use run_error::RunError;
