//! Contains the [`Cursor`] that walks the bytes of a buffered source.

use std::io::{self, BufRead};

use crate::base::position::Position;

use super::{error::ErrorKind, Error};

/// Byte cursor over a buffered source with one byte of lookahead.
///
/// The cursor only moves the column forward. Whoever consumes a `\n` has to call
/// [`Cursor::new_line`] so that the reported positions stay in sync with the input.
#[derive(Debug)]
pub struct Cursor<R> {
    reader: R,
    position: Position,
}

impl<R: BufRead> Cursor<R> {
    /// Creates a cursor at the first byte of `reader`.
    pub fn new(reader: R, position: Position) -> Self {
        Self { reader, position }
    }

    /// Get the position of the next byte.
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Peek at the next byte without consuming it.
    ///
    /// # Errors
    /// - If the underlying reader fails.
    pub fn peek(&mut self) -> Result<Option<u8>, Error> {
        loop {
            match self.reader.fill_buf() {
                Ok(buffer) => return Ok(buffer.first().copied()),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    return Err(Error::new(
                        self.position.clone(),
                        ErrorKind::Io(err.to_string()),
                    ))
                }
            }
        }
    }

    /// Consume the next byte.
    ///
    /// # Errors
    /// - If the underlying reader fails.
    pub fn advance(&mut self) -> Result<Option<u8>, Error> {
        let byte = self.peek()?;

        if byte.is_some() {
            self.reader.consume(1);
            self.position.advance_column();
        }

        Ok(byte)
    }

    /// Consume the next byte only if it equals `expected`.
    ///
    /// # Errors
    /// - If the underlying reader fails.
    pub fn eat(&mut self, expected: u8) -> Result<bool, Error> {
        if self.peek()? == Some(expected) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Registers a consumed `\n`.
    pub fn new_line(&mut self) {
        self.position.new_line();
    }
}
