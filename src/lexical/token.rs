//! Contains the [`Token`] struct and its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr, sync::OnceLock};

use enum_as_inner::EnumAsInner;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

use crate::base::position::Position;

/// Is an enumeration representing the reserved words of the language.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    And,
    Break,
    Do,
    Else,
    Elseif,
    End,
    False,
    For,
    Function,
    Goto,
    If,
    In,
    Local,
    Nil,
    Not,
    Or,
    Repeat,
    Require,
    Return,
    Then,
    True,
    Until,
    While,
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, thiserror::Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static STRING_KEYWORD_MAP: OnceLock<HashMap<&'static str, KeywordKind>> = OnceLock::new();
        let map = STRING_KEYWORD_MAP.get_or_init(|| {
            let mut map = HashMap::new();

            for keyword in Self::iter() {
                map.insert(keyword.as_str(), keyword);
            }

            map
        });

        map.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Break => "break",
            Self::Do => "do",
            Self::Else => "else",
            Self::Elseif => "elseif",
            Self::End => "end",
            Self::False => "false",
            Self::For => "for",
            Self::Function => "function",
            Self::Goto => "goto",
            Self::If => "if",
            Self::In => "in",
            Self::Local => "local",
            Self::Nil => "nil",
            Self::Not => "not",
            Self::Or => "or",
            Self::Repeat => "repeat",
            Self::Require => "require",
            Self::Return => "return",
            Self::Then => "then",
            Self::True => "true",
            Self::Until => "until",
            Self::While => "while",
        }
    }
}

/// Is an enumeration containing all kinds of tokens of the language.
///
/// Reserved words are grouped under [`TokenKind::Keyword`], so checking for a keyword is a
/// single [`TokenKind::is_keyword`] call.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum TokenKind {
    /// A reserved word.
    Keyword(KeywordKind),
    /// A name that is not reserved.
    Identifier,
    /// `=`
    Assign,
    /// `==`
    Eq,
    /// `~=`
    Ne,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
    /// `-`
    Minus,
    /// `-=`
    MinusAssign,
    /// `+`
    Plus,
    /// `+=`
    PlusAssign,
    /// A run of decimal digits.
    Number,
    /// A quoted or long-bracket string.
    String,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `..`
    Concat,
    /// `:`
    Colon,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `#`
    Pound,
}

impl TokenKind {
    /// Gets the name of the token kind, keywords are named by their spelling.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Keyword(keyword) => keyword.as_str(),
            other => other.into(),
        }
    }

    /// Whether tokens of this kind carry their payload in [`Token::text`].
    #[must_use]
    pub fn has_text(self) -> bool {
        matches!(self, Self::Identifier | Self::Number | Self::String)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents a classified unit of the source code.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token {
    /// Is the position of the token.
    ///
    /// For string literals this is where scanning of the literal finished, for every other token
    /// it is the position of its first byte.
    pub position: Position,

    /// Is the kind of the token.
    pub kind: TokenKind,

    /// Is the decoded payload of identifiers, numbers and strings. Empty for every other kind.
    pub text: String,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(position: Position, kind: TokenKind, text: String) -> Self {
        Self {
            position,
            kind,
            text,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {} column({}) {}",
            self.position.line(),
            self.position.column(),
            self.kind.name().to_uppercase()
        )?;

        if self.kind.has_text() {
            write!(f, "\t{}", self.text.escape_debug())?;
        }

        Ok(())
    }
}
