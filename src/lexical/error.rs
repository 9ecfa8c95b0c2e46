use std::fmt::Display;

use enum_as_inner::EnumAsInner;
use getset::Getters;

use crate::base::{
    log::{Message, Severity},
    position::Position,
};

/// Is an enumeration of the literals that can be left unterminated.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Literal {
    /// A string delimited by `'` or `"`.
    QuotedString,

    /// A string delimited by `[=*[` and `]=*]`.
    LongString,

    /// A comment delimited by `--[=*[` and `]=*]`.
    LongComment,
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::QuotedString => "string",
            Self::LongString => "long string",
            Self::LongComment => "long comment",
        })
    }
}

/// Is an enumeration of the conditions that stop the lexer.
#[allow(missing_docs)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, thiserror::Error)]
pub enum ErrorKind {
    /// The input is exhausted. This is how scanning normally ends.
    #[error("reach end")]
    EndOfInput,
    #[error("unknown token {}", printable(.0))]
    UnknownToken(u8),
    #[error("invalid escape sequence \\{}", printable(.0))]
    InvalidEscape(u8),
    #[error("string cannot span multiple lines")]
    UnescapedNewline,
    #[error("reach end before the {0} is closed")]
    UnterminatedLiteral(Literal),
    #[error("string not well-formed")]
    MalformedLongBracket,
    #[error("failed to read the source: {0}")]
    Io(String),
}

/// Renders a raw byte the way it would be written in a string literal.
fn printable(byte: &u8) -> impl Display {
    char::from(*byte).escape_default()
}

/// Represents an error that occurred during the lexical analysis of the source code.
///
/// The position is where the problem was detected. For constructs spanning several lines this is
/// not where the construct started.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, thiserror::Error)]
pub struct Error {
    /// Get the position at which the error was detected.
    #[get = "pub"]
    position: Position,

    /// Get the kind of the error.
    #[get = "pub"]
    kind: ErrorKind,
}

impl Error {
    /// Creates a new error of the given kind.
    #[must_use]
    pub fn new(position: Position, kind: ErrorKind) -> Self {
        Self { position, kind }
    }

    /// Whether the error only signals that the input is exhausted.
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        self.kind.is_end_of_input()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n --> {}",
            Message::new(Severity::Error, &self.kind),
            self.position
        )
    }
}
