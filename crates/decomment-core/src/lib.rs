//! # decomment-core
//!
//! Comment removal for Dart sources:
//! - Stripper: line-oriented scanner that drops `//`, `///` and `/* */` comments
//! - Scanner: recursive discovery of files by extension
//! - Processor: read → strip → write for a single file
//! - Runner: sequential batch over a target directory, reporting per-file
//!   events to a `RunHandler`
//!
//! Plus the shared config, errors, tracing and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod processor;
pub mod runner;
pub mod scanner;
pub mod stripper;
pub mod tracing;

pub use config::DecommentConfig;
pub use errors::{ConfigError, ErrorCode, FileProcessingError, RunError};
pub use events::{NoopHandler, RunHandler};
pub use processor::{process_file, ProcessedFile};
pub use runner::{run, run_in, FileFailure, RunReport};
pub use scanner::Walker;
pub use stripper::{collapse_blank_lines, strip_comments, strip_lines, CommentStripper, ScanState};
