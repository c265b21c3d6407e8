//! Error types for docsite_highlight.

use std::fmt;
use std::io;

/// Result type alias for docsite_highlight operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for docsite_highlight operations.
///
/// Tokenizing and block parsing are total and never produce an error; these
/// variants cover the surrounding surfaces (themes, colors, clipboard, output).
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing rendered output.
    Io(io::Error),
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// Theme lookup by name failed.
    UnknownTheme(String),
    /// The host clipboard rejected a write.
    Clipboard(String),
    /// A tokenizer rule pattern failed to compile.
    InvalidPattern {
        rule: &'static str,
        source: regex::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::UnknownTheme(name) => write!(f, "theme not found: {name}"),
            Self::Clipboard(reason) => write!(f, "clipboard write failed: {reason}"),
            Self::InvalidPattern { rule, source } => {
                write!(f, "invalid pattern for rule `{rule}`: {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
