//! Contains the [`Lexer`] that turns a byte stream into [`Token`]s.

use std::{io::BufRead, str::FromStr, sync::Arc};

use crate::base::position::Position;

use super::{
    cursor::Cursor,
    error::{ErrorKind, Literal},
    token::{KeywordKind, Token, TokenKind},
    Error,
};

/// Stateful scanner producing one token per [`Lexer::scan`] call.
///
/// Scanning stops at the first error, there is no resynchronization. Running out of input is
/// reported as an [`ErrorKind::EndOfInput`] error.
#[derive(Debug)]
pub struct Lexer<R> {
    cursor: Cursor<R>,
    previous_token: Option<Token>,
    current_token: Option<Token>,
}

impl<R: BufRead> Lexer<R> {
    /// Creates a lexer over `reader`. The `file_name` is only used in positions.
    pub fn new(reader: R, file_name: impl Into<Arc<str>>) -> Self {
        Self {
            cursor: Cursor::new(reader, Position::start(file_name)),
            previous_token: None,
            current_token: None,
        }
    }

    /// Get the position of the next unread byte.
    #[must_use]
    pub fn position(&self) -> &Position {
        self.cursor.position()
    }

    /// Get the token returned by the call to [`Lexer::scan`] before the last one.
    #[must_use]
    pub fn previous_token(&self) -> Option<&Token> {
        self.previous_token.as_ref()
    }

    /// Get the token returned by the last call to [`Lexer::scan`].
    #[must_use]
    pub fn current_token(&self) -> Option<&Token> {
        self.current_token.as_ref()
    }

    /// Scans the next token, skipping whitespace and comments.
    ///
    /// # Errors
    /// - [`ErrorKind::EndOfInput`] - The input is exhausted.
    /// - Any other [`ErrorKind`] - The input is not lexically valid at the reported position.
    pub fn scan(&mut self) -> Result<Token, Error> {
        self.previous_token = self.current_token.take();

        let token = self.scan_token()?;
        tracing::trace!(kind = %token.kind, position = %token.position, "scanned token");

        self.current_token = Some(token.clone());
        Ok(token)
    }

    fn scan_token(&mut self) -> Result<Token, Error> {
        loop {
            let start = self.cursor.position().clone();
            let Some(byte) = self.cursor.advance()? else {
                return Err(Error::new(start, ErrorKind::EndOfInput));
            };

            let kind = match byte {
                b'\n' => {
                    self.cursor.new_line();
                    continue;
                }
                b' ' | b'\t' | b'\r' => continue,
                b'-' => {
                    if self.cursor.eat(b'-')? {
                        self.skip_comment()?;
                        continue;
                    }
                    self.one_or_two(b'=', TokenKind::Minus, TokenKind::MinusAssign)?
                }
                b'+' => self.one_or_two(b'=', TokenKind::Plus, TokenKind::PlusAssign)?,
                b'=' => self.one_or_two(b'=', TokenKind::Assign, TokenKind::Eq)?,
                b'>' => self.one_or_two(b'=', TokenKind::Gt, TokenKind::Gte)?,
                b'<' => self.one_or_two(b'=', TokenKind::Lt, TokenKind::Lte)?,
                b'.' => self.one_or_two(b'.', TokenKind::Dot, TokenKind::Concat)?,
                b'~' => {
                    if !self.cursor.eat(b'=')? {
                        return Err(Error::new(start, ErrorKind::UnknownToken(byte)));
                    }
                    TokenKind::Ne
                }
                b'(' => TokenKind::LeftParen,
                b')' => TokenKind::RightParen,
                b',' => TokenKind::Comma,
                b':' => TokenKind::Colon,
                b'{' => TokenKind::OpenBrace,
                b'}' => TokenKind::CloseBrace,
                b']' => TokenKind::RightBracket,
                b'#' => TokenKind::Pound,
                b'[' => match self.cursor.peek()? {
                    Some(b'[' | b'=') => return self.long_string(),
                    _ => TokenKind::LeftBracket,
                },
                b'\'' | b'"' => return self.quoted_string(byte),
                b'0'..=b'9' => return self.number(start, byte),
                b'a'..=b'z' | b'A'..=b'Z' | b'_' => return self.identifier_or_keyword(start, byte),
                _ => return Err(Error::new(start, ErrorKind::UnknownToken(byte))),
            };

            return Ok(Token::new(start, kind, String::new()));
        }
    }

    /// Picks `double` if the next byte is `second`, consuming it.
    fn one_or_two(
        &mut self,
        second: u8,
        single: TokenKind,
        double: TokenKind,
    ) -> Result<TokenKind, Error> {
        Ok(if self.cursor.eat(second)? {
            double
        } else {
            single
        })
    }

    /// Skips a comment whose leading `--` was already consumed.
    fn skip_comment(&mut self) -> Result<(), Error> {
        if self.cursor.eat(b'[')? {
            if let Some(level) = self.long_bracket_level()? {
                self.long_bracket_body(level, Literal::LongComment, None)?;
                tracing::trace!(level, position = %self.cursor.position(), "skipped long comment");
                return Ok(());
            }
        }

        // the newline itself is left to the caller
        while let Some(byte) = self.cursor.peek()? {
            if byte == b'\n' {
                break;
            }
            self.cursor.advance()?;
        }

        Ok(())
    }

    /// Reads the `=` run and the second `[` of a long bracket whose first `[` was consumed.
    ///
    /// Returns the level, or `None` if the second `[` is missing.
    fn long_bracket_level(&mut self) -> Result<Option<usize>, Error> {
        let mut level = 0;
        while self.cursor.eat(b'=')? {
            level += 1;
        }

        Ok(self.cursor.eat(b'[')?.then_some(level))
    }

    /// Consumes a long bracket body up to and including the closer of the given level.
    ///
    /// The body is appended to `body` if given.
    fn long_bracket_body(
        &mut self,
        level: usize,
        literal: Literal,
        mut body: Option<&mut Vec<u8>>,
    ) -> Result<(), Error> {
        loop {
            let Some(byte) = self.cursor.advance()? else {
                return Err(Error::new(
                    self.cursor.position().clone(),
                    ErrorKind::UnterminatedLiteral(literal),
                ));
            };

            if byte == b']' {
                let mut run = 0;
                while self.cursor.eat(b'=')? {
                    run += 1;
                }

                if run == level && self.cursor.eat(b']')? {
                    return Ok(());
                }

                // not a closer, a following `]` may still start one
                if let Some(body) = body.as_deref_mut() {
                    body.push(b']');
                    body.resize(body.len() + run, b'=');
                }
                continue;
            }

            if byte == b'\n' {
                self.cursor.new_line();
            }
            if let Some(body) = body.as_deref_mut() {
                body.push(byte);
            }
        }
    }

    /// Scans a long-bracket string whose first `[` was consumed.
    fn long_string(&mut self) -> Result<Token, Error> {
        let Some(level) = self.long_bracket_level()? else {
            return Err(Error::new(
                self.cursor.position().clone(),
                ErrorKind::MalformedLongBracket,
            ));
        };

        // a newline right after the opener is not part of the string
        if self.cursor.eat(b'\n')? {
            self.cursor.new_line();
        }

        let mut body = Vec::new();
        self.long_bracket_body(level, Literal::LongString, Some(&mut body))?;

        Ok(Token::new(
            self.cursor.position().clone(),
            TokenKind::String,
            String::from_utf8_lossy(&body).into_owned(),
        ))
    }

    /// Scans a string delimited by `quote`, decoding escape sequences.
    fn quoted_string(&mut self, quote: u8) -> Result<Token, Error> {
        let mut text = Vec::new();

        loop {
            let here = self.cursor.position().clone();
            let Some(byte) = self.cursor.advance()? else {
                return Err(Error::new(
                    here,
                    ErrorKind::UnterminatedLiteral(Literal::QuotedString),
                ));
            };

            match byte {
                b'\\' => text.push(self.escape_sequence()?),
                b'\n' => {
                    self.cursor.new_line();
                    return Err(Error::new(here, ErrorKind::UnescapedNewline));
                }
                _ if byte == quote => break,
                _ => text.push(byte),
            }
        }

        Ok(Token::new(
            self.cursor.position().clone(),
            TokenKind::String,
            String::from_utf8_lossy(&text).into_owned(),
        ))
    }

    /// Decodes the escape sequence following a consumed `\`.
    fn escape_sequence(&mut self) -> Result<u8, Error> {
        let here = self.cursor.position().clone();
        let Some(byte) = self.cursor.advance()? else {
            return Err(Error::new(
                here,
                ErrorKind::UnterminatedLiteral(Literal::QuotedString),
            ));
        };

        let decoded = match byte {
            b'\\' | b'"' | b'\'' => byte,
            b'a' => 0x07,
            b'b' => 0x08,
            b'f' => 0x0c,
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'v' => 0x0b,
            b'0' => 0x00,
            b'\n' => {
                self.cursor.new_line();
                b'\n'
            }
            _ => return Err(Error::new(here, ErrorKind::InvalidEscape(byte))),
        };

        Ok(decoded)
    }

    /// Scans a run of decimal digits.
    fn number(&mut self, start: Position, first: u8) -> Result<Token, Error> {
        let text = self.take_while(first, |byte| byte.is_ascii_digit())?;

        Ok(Token::new(start, TokenKind::Number, text))
    }

    /// Scans a name and checks it against the reserved words.
    fn identifier_or_keyword(&mut self, start: Position, first: u8) -> Result<Token, Error> {
        let word = self.take_while(first, |byte| byte.is_ascii_alphanumeric() || byte == b'_')?;

        Ok(match KeywordKind::from_str(&word) {
            Ok(keyword) => Token::new(start, TokenKind::Keyword(keyword), String::new()),
            Err(_) => Token::new(start, TokenKind::Identifier, word),
        })
    }

    /// Collects `first` and the following bytes matching `predicate`.
    ///
    /// Only ever called with ASCII predicates, so the result is valid UTF-8.
    fn take_while(&mut self, first: u8, predicate: impl Fn(u8) -> bool) -> Result<String, Error> {
        let mut text = String::from(char::from(first));

        while let Some(byte) = self.cursor.peek()? {
            if !predicate(byte) {
                break;
            }
            self.cursor.advance()?;
            text.push(char::from(byte));
        }

        Ok(text)
    }
}
