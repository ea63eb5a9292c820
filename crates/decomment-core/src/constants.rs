//! Shared constants for decomment.

/// decomment version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target directory, relative to the executable's directory.
pub const DEFAULT_TARGET_DIR: &str = "lib/lib_admin";

/// Source extension of the files to rewrite (without the leading dot).
pub const DEFAULT_EXTENSION: &str = "dart";

/// Project config file name, looked up in the executable's directory.
pub const CONFIG_FILE_NAME: &str = "decomment.toml";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "DECOMMENT_LOG";

/// Filter used when `DECOMMENT_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "decomment_core=info";

// ---- Comment syntax ----

pub const LINE_COMMENT: &str = "//";
pub const BLOCK_COMMENT_OPEN: &str = "/*";
pub const BLOCK_COMMENT_CLOSE: &str = "*/";

/// Characters that open a string literal.
pub const STRING_DELIMITERS: [char; 2] = ['"', '\''];

pub const ESCAPE_CHAR: char = '\\';
