use std::{
    borrow::Cow,
    collections::HashMap,
    path::{Path, PathBuf},
};

use lualex::{
    base::{Error, FileProvider, FsProvider, PrintHandler, SilentHandler, VoidHandler},
    lexical::{
        token::{KeywordKind, TokenKind},
        ErrorKind, Literal,
    },
};

/// In-memory files keyed by path.
#[derive(Default)]
struct MemoryProvider {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryProvider {
    fn with_file(path: &str, content: &str) -> Self {
        let mut provider = Self::default();
        provider
            .files
            .insert(PathBuf::from(path), content.as_bytes().to_vec());
        provider
    }
}

impl FileProvider for MemoryProvider {
    fn read_bytes<P: AsRef<Path>>(&self, path: P) -> Result<Cow<[u8]>, Error> {
        self.files
            .get(path.as_ref())
            .map(|content| Cow::Borrowed(content.as_slice()))
            .ok_or_else(|| Error::IoError("File not found".to_string()))
    }
}

fn positions_of(tokens: &[lualex::lexical::token::Token], kind: TokenKind) -> Vec<(usize, usize)> {
    tokens
        .iter()
        .filter(|token| token.kind == kind)
        .map(|token| (token.position.line(), token.position.column()))
        .collect()
}

#[test]
fn lexing_sample() {
    let source = include_str!("./sample.lua");
    let provider = MemoryProvider::with_file("sample.lua", source);

    let tokens = lualex::tokenize(&VoidHandler, &provider, Path::new("sample.lua"))
        .expect("Failed to tokenize");

    assert_eq!(tokens.len(), 55);

    let first = &tokens[0];
    assert_eq!(first.kind, TokenKind::Keyword(KeywordKind::Local));
    assert_eq!(first.position.file_name().as_ref(), "sample.lua");
    assert_eq!((first.position.line(), first.position.column()), (2, 1));

    let strings = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::String)
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(strings, vec!["hello\tworld", "anonymous", "util"]);

    // strings are positioned where they end
    assert_eq!(
        positions_of(&tokens, TokenKind::String),
        vec![(2, 32), (11, 12), (17, 15)]
    );

    assert_eq!(positions_of(&tokens, TokenKind::PlusAssign), vec![(6, 11)]);
    assert_eq!(positions_of(&tokens, TokenKind::Ne), vec![(7, 13)]);
    assert_eq!(positions_of(&tokens, TokenKind::Concat), vec![(8, 25)]);
    assert_eq!(
        positions_of(&tokens, TokenKind::Keyword(KeywordKind::Require)),
        vec![(17, 1)]
    );
    assert_eq!(positions_of(&tokens, TokenKind::CloseBrace), vec![(18, 39)]);

    let numbers = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Number)
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(numbers, vec!["10", "1", "1", "2"]);
}

#[test]
fn lexing_sample_from_file_system() {
    let provider = FsProvider::from(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/lexing"));
    let handler = PrintHandler::new();

    let tokens = lualex::tokenize(&handler, &provider, Path::new("sample.lua"))
        .expect("Failed to tokenize");

    assert!(!handler.has_printed());

    let listing = tokens.to_string();
    let mut lines = listing.lines();
    assert_eq!(lines.next(), Some("line 2 column(1) LOCAL"));
    assert_eq!(lines.next(), Some("line 2 column(7) IDENTIFIER\tgreeting"));
    assert_eq!(lines.next(), Some("line 2 column(16) ASSIGN"));
    assert_eq!(lines.next(), Some("line 2 column(32) STRING\thello\\tworld"));
    assert_eq!(listing.lines().count(), 55);
}

#[test]
fn lexing_invalid() {
    let provider = MemoryProvider::with_file("invalid.lua", "local s = \"bad \\q escape\"\n");
    let handler = SilentHandler::new();

    let err = lualex::tokenize(&handler, &provider, Path::new("invalid.lua"))
        .expect_err("Expecting lexing failure");

    assert_eq!(handler.received(), 1);

    let Error::LexicalError(err) = err else {
        panic!("Expected a lexical error, got {err:?}");
    };
    assert_eq!(err.kind(), &ErrorKind::InvalidEscape(b'q'));
    assert_eq!(err.position().line(), 1);
    assert_eq!(err.position().column(), 17);
}

#[test]
fn lexing_unterminated_long_string() {
    let provider = MemoryProvider::with_file("open.lua", "x = [==[\nnever ]=] closed\n");
    let handler = SilentHandler::new();

    let err = lualex::tokenize(&handler, &provider, Path::new("open.lua"))
        .expect_err("Expecting lexing failure");

    assert_eq!(
        err,
        Error::LexicalError(lualex::lexical::Error::new(
            lualex::base::position::Position::new("open.lua", 3, 1),
            ErrorKind::UnterminatedLiteral(Literal::LongString),
        ))
    );
}

#[test]
fn lexing_missing_file() {
    let provider = MemoryProvider::default();
    let handler = SilentHandler::new();

    let err = lualex::tokenize(&handler, &provider, Path::new("missing.lua"))
        .expect_err("Expecting read failure");

    assert!(matches!(err, Error::IoError(_)));
    assert_eq!(handler.received(), 0);
}
