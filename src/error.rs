//! Error handling for the importer.
//!
//! Three layers report failures:
//!
//! - [`JsonError`] - the tolerant JSON lexer/parser
//! - [`EncodeError`] - the JSON to SCSS transform
//! - [`LoadError`] - the single failure kind handed back to the host compiler
//!
//! A reference that cannot be resolved is not an error at all; resolution
//! returns `None` so the host can try its other importers.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// 1-based line/column of a byte in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number, starting at 1
    pub line: usize,
    /// Column number in characters, starting at 1
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Errors produced while lexing or parsing JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonError {
    /// Character that cannot start any token
    #[error("unexpected character '{found}' at {at}")]
    UnexpectedCharacter {
        /// Offending character
        found: char,
        /// Where it was found
        at: Position,
    },

    /// Token that is not valid in the current context
    #[error("unexpected {found} at {at}, expected {expected}")]
    UnexpectedToken {
        /// Description of the token that was found
        found: String,
        /// What the parser was looking for
        expected: &'static str,
        /// Where it was found
        at: Position,
    },

    /// Input ended inside a value
    #[error("unexpected end of input at {at}, expected {expected}")]
    UnexpectedEnd {
        /// What the parser was looking for
        expected: &'static str,
        /// End-of-input position
        at: Position,
    },

    /// String literal without a closing quote
    #[error("unterminated string starting at {at}")]
    UnterminatedString {
        /// Position of the opening quote
        at: Position,
    },

    /// Block comment without a closing `*/`
    #[error("unterminated block comment starting at {at}")]
    UnterminatedComment {
        /// Position of the opening `/*`
        at: Position,
    },

    /// Raw control character inside a string
    #[error("control character U+{codepoint:04X} in string at {at}")]
    ControlCharacter {
        /// Code point of the control character
        codepoint: u32,
        /// Where it was found
        at: Position,
    },

    /// Malformed escape sequence (including unpaired surrogates)
    #[error("invalid escape sequence at {at}")]
    InvalidEscape {
        /// Position of the backslash
        at: Position,
    },

    /// Malformed number literal
    #[error("invalid number '{literal}' at {at}")]
    InvalidNumber {
        /// Raw text of the literal
        literal: String,
        /// Where it starts
        at: Position,
    },

    /// Non-whitespace content after the top-level value
    #[error("trailing content at {at}")]
    TrailingContent {
        /// Start of the extra content
        at: Position,
    },

    /// Input larger than [`Limits::max_input_size`](crate::json::Limits)
    #[error("input of {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge {
        /// Input size in bytes
        size: u64,
        /// Configured limit
        limit: u64,
    },

    /// Arrays/objects nested deeper than [`Limits::max_nesting_depth`](crate::json::Limits)
    #[error("nesting depth {depth} exceeds limit of {limit} at {at}")]
    NestingTooDeep {
        /// Depth reached
        depth: usize,
        /// Configured limit
        limit: usize,
        /// Position of the opening bracket
        at: Position,
    },
}

/// Result type for JSON parsing.
pub type JsonResult<T> = Result<T, JsonError>;

/// Errors produced while transforming a parsed tree into SCSS.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Tree nested deeper than the encoder allows
    #[error("value nested {depth} levels deep exceeds limit of {limit}")]
    NestingTooDeep {
        /// Depth reached
        depth: usize,
        /// Configured limit
        limit: usize,
    },

    /// Top-level value that cannot hold declarations
    #[error("top-level value must be an object or an array, found {found}")]
    UnsupportedRoot {
        /// Type name of the top-level value
        found: &'static str,
    },

    /// NaN or infinity has no SCSS literal
    #[error("number {value} at '{path}' has no SCSS representation")]
    NonFiniteNumber {
        /// Printed form of the number
        value: String,
        /// Dotted key path of the value
        path: String,
    },
}

/// Result type for encoding.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Step of [`load`](crate::Importer::load) that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadPhase {
    /// Reading the file from disk
    Read,
    /// Parsing the text as JSON
    Parse,
    /// Turning the parsed tree into SCSS
    Transform,
}

impl fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoadPhase::Read => "read",
            LoadPhase::Parse => "parse",
            LoadPhase::Transform => "transform",
        })
    }
}

/// Failure to load a resolved JSON document.
///
/// Parse and transform problems share this one type; the phase is kept in
/// the message so the host can show which step went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to {phase} JSON from file {}: {cause}", .path.display())]
pub struct LoadError {
    path: PathBuf,
    phase: LoadPhase,
    cause: String,
}

impl LoadError {
    /// Wrap any displayable cause. Non-error causes are accepted too.
    pub fn new(path: impl Into<PathBuf>, phase: LoadPhase, cause: impl fmt::Display) -> Self {
        Self {
            path: path.into(),
            phase,
            cause: cause.to_string(),
        }
    }

    /// File that failed to load.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Step that failed.
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Stringified underlying cause.
    pub fn cause(&self) -> &str {
        &self.cause
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_names_file_and_phase() {
        let err = LoadError::new(
            "/themes/broken.json",
            LoadPhase::Parse,
            JsonError::UnexpectedEnd {
                expected: "'}'",
                at: Position { line: 3, column: 1 },
            },
        );
        assert_eq!(
            err.to_string(),
            "Failed to parse JSON from file /themes/broken.json: \
             unexpected end of input at line 3, column 1, expected '}'"
        );
        assert_eq!(err.phase(), LoadPhase::Parse);
        assert_eq!(err.path(), Path::new("/themes/broken.json"));
    }

    #[test]
    fn test_load_error_accepts_plain_strings() {
        let err = LoadError::new("/a.json", LoadPhase::Transform, "foo");
        assert_eq!(err.to_string(), "Failed to transform JSON from file /a.json: foo");
        assert_eq!(err.cause(), "foo");
    }

    #[test]
    fn test_encode_error_message() {
        let err = EncodeError::NestingTooDeep { depth: 9, limit: 8 };
        assert_eq!(err.to_string(), "value nested 9 levels deep exceeds limit of 8");
    }
}
