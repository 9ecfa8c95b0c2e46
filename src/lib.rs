//! Lexical analysis for a Lua dialect.
//!
//! The dialect extends the usual Lua keywords with `require` and adds the `+=` and `-=`
//! operators. The [`Lexer`](lexical::lexer::Lexer) produces one token per call and stops at the
//! first lexical error.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod base;
pub mod lexical;

use std::path::Path;

use base::{FileProvider, Handler, Result};

use crate::lexical::{lexer::Lexer, token_stream::TokenStream};

/// Converts the source file at the given path to tokens.
///
/// # Errors
/// - If an error occurs while reading the file.
/// - If the source code is not lexically valid. The error is also passed to the handler.
pub fn tokenize(
    handler: &impl Handler<base::Error>,
    provider: &impl FileProvider,
    path: &Path,
) -> Result<TokenStream> {
    tracing::debug!("Tokenizing the source code at path: {}", path.display());

    let source = provider.read_bytes(path)?;
    let mut lexer = Lexer::new(&source[..], path.display().to_string());

    TokenStream::tokenize(&mut lexer).map_err(|err| {
        handler.receive(base::Error::from(err.clone()));
        base::Error::from(err)
    })
}
