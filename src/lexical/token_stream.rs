//! Contains the [`TokenStream`] struct.

use std::{fmt::Display, io::BufRead};

use derive_more::Deref;
use itertools::Itertools;

use super::{lexer::Lexer, token::Token, Error};

/// Is the list of every token of a source, in order.
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// next stage of the compilation process.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Tokenizes the whole input of the given lexer.
    ///
    /// This function calls [`Lexer::scan()`] repeatedly until the input is exhausted.
    ///
    /// # Errors
    /// - The first lexical error other than reaching the end of the input.
    #[tracing::instrument(level = "debug", skip_all, fields(source_file = %lexer.position().file_name()))]
    pub fn tokenize<R: BufRead>(lexer: &mut Lexer<R>) -> Result<Self, Error> {
        let mut tokens = Vec::new();

        loop {
            match lexer.scan() {
                Ok(token) => tokens.push(token),
                Err(err) if err.is_end_of_input() => break,
                Err(err) => {
                    tracing::error!(
                        position = %err.position(),
                        "Fatal lexical error encountered while tokenizing source code: {}",
                        err.kind()
                    );
                    return Err(err);
                }
            }
        }

        tracing::debug!(count = tokens.len(), "Tokenized source code");

        Ok(Self { tokens })
    }

    /// Dissolves this struct into its tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> {
        self.tokens
    }
}

impl Display for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tokens.iter().join("\n"))
    }
}
