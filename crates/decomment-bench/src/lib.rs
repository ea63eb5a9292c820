//! # decomment-bench
//!
//! Benchmarks for the decomment scanner. Contains deterministic Dart source
//! generators shared by the criterion benches and their tests.

pub mod fixtures;
