//! Scanner subsystem: sequential discovery of files to rewrite.

pub mod walker;

pub use walker::Walker;
