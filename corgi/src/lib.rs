//! Front end of the Corgi language: tokenizer, parser and syntax tree.
//!
//! A Corgi source file declares a single class whose body is a sequence of `var` and `print`
//! statements:
//!
//! ```
//! let unit = corgi::parse("Foo { var x = 5 print x }").unwrap();
//! assert_eq!(unit.class.name, "Foo");
//! assert_eq!(unit.class.body.len(), 2);
//! ```

pub mod ast;
pub mod errors;
pub mod options;
pub mod parser;
pub mod source;
pub mod utils;

use crate::options::ParserOptions;
use crate::parser::tokens::primary::tokenizer_for;
use crate::parser::tokens::token::Token;
use crate::parser::tokens::tokenizer::{LexicalError, Tokens};

pub use crate::parser::tokens::token::TokenKind;
pub use crate::parser::{parse_tokens, ParseError, SyntaxError};

/// Starts scanning `source` with default options. See `tokenize_with`.
pub fn tokenize(source: &str) -> Tokens<'_> {
    tokenize_with(source, &ParserOptions::default())
}

/// Returns a lazy token sequence for `source`.
///
/// The sequence ends with a single `Eof` token, or stops right after the first lexical error.
/// Every call starts over from the beginning of `source`.
pub fn tokenize_with<'a>(source: &'a str, options: &ParserOptions) -> Tokens<'a> {
    Tokens::new(tokenizer_for(options), source)
}

/// Scans the whole of `source`, including the final `Eof` token.
pub fn tokenize_all(source: &str, options: &ParserOptions) -> Result<Vec<Token>, LexicalError> {
    tokenize_with(source, options).collect()
}

/// Parses `source` with default options.
pub fn parse(source: &str) -> Result<ast::CompilationUnit, ParseError> {
    parse_with(source, &ParserOptions::default())
}

pub fn parse_with(
    source: &str,
    options: &ParserOptions,
) -> Result<ast::CompilationUnit, ParseError> {
    parse_tokens(tokenize_with(source, options))
}
