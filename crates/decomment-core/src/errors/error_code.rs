//! ErrorCode trait for stable, machine-readable error identifiers.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait ErrorCode {
    /// Returns the code string (e.g., "FILE_READ_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const FILE_READ_ERROR: &str = "FILE_READ_ERROR";
pub const FILE_WRITE_ERROR: &str = "FILE_WRITE_ERROR";
pub const DIRECTORY_NOT_FOUND: &str = "DIRECTORY_NOT_FOUND";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
