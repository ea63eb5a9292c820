//! Scanner states.

/// Classification of the current scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Ordinary code; comment markers and quotes are live.
    #[default]
    Code,
    /// Inside a string literal opened by the given delimiter (`"` or `'`).
    InString(char),
    /// Inside a `/* ... */` comment that has not been closed yet.
    InBlockComment,
}

impl ScanState {
    pub fn is_code(&self) -> bool {
        matches!(self, Self::Code)
    }

    pub fn is_in_string(&self) -> bool {
        matches!(self, Self::InString(_))
    }

    pub fn is_in_block_comment(&self) -> bool {
        matches!(self, Self::InBlockComment)
    }

    /// The delimiter of the open string, if any.
    pub fn string_delimiter(&self) -> Option<char> {
        match self {
            Self::InString(delim) => Some(*delim),
            _ => None,
        }
    }
}
