//! Module for tracking positions within a source.

use std::{fmt::Display, sync::Arc};

use getset::{CopyGetters, Getters};

/// Pointing to a particular location in a named source.
///
/// The column counts the bytes consumed since the last newline, both line and column start at 1.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters)]
pub struct Position {
    /// Get the line number of the position (starts at 1).
    #[get_copy = "pub"]
    line: usize,

    /// Get the column number of the position (starts at 1).
    #[get_copy = "pub"]
    column: usize,

    /// Get the display name of the source the position is located in.
    #[get = "pub"]
    file_name: Arc<str>,
}

impl Position {
    /// Create a position at the given line and column.
    #[must_use]
    pub fn new(file_name: impl Into<Arc<str>>, line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            file_name: file_name.into(),
        }
    }

    /// Create a position pointing at the very first byte of a source.
    #[must_use]
    pub fn start(file_name: impl Into<Arc<str>>) -> Self {
        Self::new(file_name, 1, 1)
    }

    /// Moves the position one byte to the right.
    pub(crate) fn advance_column(&mut self) {
        self.column += 1;
    }

    /// Moves the position to the start of the next line.
    pub(crate) fn new_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file_name, self.line, self.column)
    }
}
