//! Per-line comment removal with block-comment carry-over.

use std::borrow::Cow;

use super::state::ScanState;
use crate::constants::{
    BLOCK_COMMENT_CLOSE, BLOCK_COMMENT_OPEN, ESCAPE_CHAR, LINE_COMMENT, STRING_DELIMITERS,
};

/// Strips comments from the lines of one file, in order.
///
/// A fresh stripper must be used for every file: the only state it keeps is
/// whether a `/* ... */` comment is still open at the end of the last line.
#[derive(Debug, Default)]
pub struct CommentStripper {
    in_block_comment: bool,
}

impl CommentStripper {
    pub fn new() -> Self {
        Self::default()
    }

    /// State carried into the next line: `InBlockComment` or `Code`.
    pub fn carried_state(&self) -> ScanState {
        if self.in_block_comment {
            ScanState::InBlockComment
        } else {
            ScanState::Code
        }
    }

    /// Returns `line` with comments removed and trailing whitespace trimmed.
    ///
    /// Always returns a line, possibly empty, so callers keep a 1:1 mapping
    /// between input and output lines.
    pub fn strip_line(&mut self, line: &str) -> String {
        let mut rest = line;

        if self.in_block_comment {
            match line.find(BLOCK_COMMENT_CLOSE) {
                Some(end) => {
                    rest = &line[end + BLOCK_COMMENT_CLOSE.len()..];
                    self.in_block_comment = false;
                }
                None => return String::new(),
            }
        }

        let rest = self.remove_first_block_comment(rest);
        let kept = self.scan(&rest);
        kept.trim_end().to_string()
    }

    /// Removes the first `/* ... */` on the line, or truncates at an opener
    /// that has no terminator on this line. Quotes are not considered here.
    fn remove_first_block_comment<'a>(&mut self, line: &'a str) -> Cow<'a, str> {
        let Some(start) = line.find(BLOCK_COMMENT_OPEN) else {
            return Cow::Borrowed(line);
        };

        let body = start + BLOCK_COMMENT_OPEN.len();
        match line[body..].find(BLOCK_COMMENT_CLOSE) {
            Some(offset) => {
                let end = body + offset + BLOCK_COMMENT_CLOSE.len();
                let mut joined = String::with_capacity(line.len() - (end - start));
                joined.push_str(&line[..start]);
                joined.push_str(&line[end..]);
                Cow::Owned(joined)
            }
            None => {
                self.in_block_comment = true;
                Cow::Borrowed(&line[..start])
            }
        }
    }

    /// Character scan for line comments, leftover block comments and strings.
    fn scan(&mut self, line: &str) -> String {
        let bytes = line.as_bytes();
        let mut out = String::with_capacity(line.len());
        let mut state = ScanState::Code;
        let mut pos = 0;

        while let Some(ch) = line[pos..].chars().next() {
            match state {
                ScanState::Code => {
                    let rest = &line[pos..];
                    if rest.starts_with(LINE_COMMENT) {
                        break;
                    }
                    if rest.starts_with(BLOCK_COMMENT_OPEN) {
                        let body = BLOCK_COMMENT_OPEN.len();
                        match rest[body..].find(BLOCK_COMMENT_CLOSE) {
                            Some(offset) => {
                                pos += body + offset + BLOCK_COMMENT_CLOSE.len();
                                continue;
                            }
                            None => {
                                state = ScanState::InBlockComment;
                                break;
                            }
                        }
                    }
                    if STRING_DELIMITERS.contains(&ch) {
                        state = ScanState::InString(ch);
                    }
                    out.push(ch);
                }
                ScanState::InString(delim) => {
                    out.push(ch);
                    // Only the immediately preceding character is checked, so
                    // `"\\"` leaves the string open.
                    if ch == delim && !follows_escape(bytes, pos) {
                        state = ScanState::Code;
                    }
                }
                ScanState::InBlockComment => break,
            }
            pos += ch.len_utf8();
        }

        if state.is_in_block_comment() {
            self.in_block_comment = true;
        }
        out
    }
}

fn follows_escape(bytes: &[u8], pos: usize) -> bool {
    pos > 0 && bytes[pos - 1] == ESCAPE_CHAR as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_one(line: &str) -> String {
        CommentStripper::new().strip_line(line)
    }

    fn strip_all(lines: &[&str]) -> Vec<String> {
        let mut stripper = CommentStripper::new();
        lines.iter().map(|l| stripper.strip_line(l)).collect()
    }

    #[test]
    fn line_comment_truncates() {
        assert_eq!(strip_one("int x = 5; // set x"), "int x = 5;");
    }

    #[test]
    fn doc_comment_line_becomes_empty() {
        assert_eq!(strip_one("  /// Returns the admin id."), "");
    }

    #[test]
    fn comment_marker_in_string_is_kept() {
        assert_eq!(strip_one(r#"x = "http://example.com""#), r#"x = "http://example.com""#);
        assert_eq!(
            strip_one(r#"url = "http://x"; // real comment"#),
            r#"url = "http://x";"#
        );
    }

    #[test]
    fn single_quoted_strings_are_tracked() {
        assert_eq!(strip_one("print('// not'); // yes"), "print('// not');");
    }

    #[test]
    fn other_quote_does_not_close_string() {
        assert_eq!(
            strip_one(r#"s = "it's // fine"; // gone"#),
            r#"s = "it's // fine";"#
        );
    }

    #[test]
    fn inline_block_comment_keeps_surrounding_spaces() {
        assert_eq!(strip_one("int x = /* inline */ 5;"), "int x =  5;");
    }

    #[test]
    fn second_inline_block_comment_is_skipped() {
        assert_eq!(strip_one("a /* x */ b /* y */ c"), "a  b  c");
    }

    #[test]
    fn escaped_quote_does_not_close_string() {
        let line = r#"s = "say \"hi\" // not a comment";"#;
        assert_eq!(strip_one(line), line);
    }

    #[test]
    fn escaped_backslash_leaves_string_open() {
        // The string never closes, so the trailing marker is read as string content.
        let line = r#"s = "a\\"; // c"#;
        assert_eq!(strip_one(line), line);
    }

    #[test]
    fn block_markers_in_strings_are_still_removed() {
        assert_eq!(strip_one(r#"s = "/* not */";"#), r#"s = "";"#);

        let mut stripper = CommentStripper::new();
        assert_eq!(stripper.strip_line(r#"s = "/*"; f();"#), r#"s = ""#);
        assert_eq!(stripper.carried_state(), ScanState::InBlockComment);
    }

    #[test]
    fn trailing_whitespace_is_trimmed() {
        assert_eq!(strip_one("x = 1;   \t"), "x = 1;");
        assert_eq!(strip_one("y(); /* note */   "), "y();");
        assert_eq!(strip_one("a();\r"), "a();");
    }

    #[test]
    fn multi_line_block_comment_blanks_spanned_lines() {
        let out = strip_all(&["/* start", "middle", "end */ code();"]);
        assert_eq!(out, vec!["", "", " code();"]);
    }

    #[test]
    fn carry_over_survives_until_terminator() {
        let mut stripper = CommentStripper::new();
        assert_eq!(stripper.strip_line("code(); /* open"), "code();");
        assert!(stripper.carried_state().is_in_block_comment());
        assert_eq!(stripper.strip_line("still comment"), "");
        assert!(stripper.carried_state().is_in_block_comment());
        assert_eq!(stripper.strip_line("*/ after();"), " after();");
        assert!(stripper.carried_state().is_code());
    }

    #[test]
    fn remainder_after_terminator_is_fully_scanned() {
        let out = strip_all(&["/* a", "b */ x /* c */ y // z"]);
        assert_eq!(out, vec!["", " x  y"]);
    }

    #[test]
    fn quotes_inside_carried_block_are_ignored() {
        let out = strip_all(&["/* it's", "still 'open */ done();"]);
        assert_eq!(out, vec!["", " done();"]);
    }

    #[test]
    fn unterminated_second_block_opens_carry() {
        let mut stripper = CommentStripper::new();
        assert_eq!(stripper.strip_line("a /* x */ b /* y"), "a  b");
        assert!(stripper.carried_state().is_in_block_comment());
        assert_eq!(stripper.strip_line("z */ w"), " w");
    }

    #[test]
    fn string_state_resets_each_line() {
        let out = strip_all(&["s = 'abc", "x = 1; // c"]);
        assert_eq!(out, vec!["s = 'abc", "x = 1;"]);
    }

    #[test]
    fn non_ascii_text_is_preserved() {
        assert_eq!(
            strip_one(r#"final s = "héllo // 世界"; // 注释"#),
            r#"final s = "héllo // 世界";"#
        );
        assert_eq!(strip_one("ü /* ö */ ä"), "ü  ä");
    }

    #[test]
    fn lone_slash_and_star_are_code() {
        assert_eq!(strip_one("a = b / c * d;"), "a = b / c * d;");
        assert_eq!(strip_one("x */ y"), "x */ y");
    }
}
