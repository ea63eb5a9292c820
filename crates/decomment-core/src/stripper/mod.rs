//! Stripper subsystem: comment removal for Dart source text.
//!
//! Each line is scanned by a small state machine (`ScanState`) that tracks
//! whether the current position is code, inside a string literal, or inside a
//! block comment. Only the block-comment state survives from one line to the
//! next; string state is reset at every line break.

pub mod line;
pub mod state;
pub mod text;

pub use line::CommentStripper;
pub use state::ScanState;
pub use text::{collapse_blank_lines, strip_comments, strip_lines};
