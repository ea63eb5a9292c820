//! Per-file run events, reported synchronously as the batch progresses.

pub mod handler;

pub use handler::{NoopHandler, RunHandler};
