//! Whole-file comment removal.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::line::CommentStripper;

/// Three or more consecutive line feeds (two or more blank lines).
static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Strips every line of `text`, returning exactly one output line per input
/// line (split on `\n`).
pub fn strip_lines(text: &str) -> Vec<String> {
    let mut stripper = CommentStripper::new();
    text.split('\n').map(|line| stripper.strip_line(line)).collect()
}

/// Collapses each run of two or more blank lines down to one.
pub fn collapse_blank_lines(text: &str) -> Cow<'_, str> {
    BLANK_RUN_RE.replace_all(text, "\n\n")
}

/// Removes all comments from one file's text.
///
/// Lines are rejoined with `\n` regardless of the original line endings, then
/// blank-line runs are collapsed. A block comment left open at end of text
/// silently swallows the rest of the file.
pub fn strip_comments(text: &str) -> String {
    let joined = strip_lines(text).join("\n");
    collapse_blank_lines(&joined).into_owned()
}
