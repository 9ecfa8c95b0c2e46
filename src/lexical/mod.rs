//! The lexical module is responsible for converting raw bytes into a stream of tokens that a parser can understand.

pub mod cursor;

pub mod lexer;

pub mod token_stream;

pub mod token;

mod error;
pub use error::{Error, ErrorKind, Literal};
