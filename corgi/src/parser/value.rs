//! Literal value parsers.

use crate::ast;
use crate::parser::prelude::*;

/// `value := NUMBER | STRING`
pub struct Value;

impl Parser for Value {
    type N = ast::Value;

    fn parse(input: Input) -> ParseResult<Self::N> {
        <OneOf2<NumberLiteral, StringLiteral>>::parse(input)
    }
}

struct NumberLiteral;

impl Parser for NumberLiteral {
    type N = ast::Value;

    fn parse(input: Input) -> ParseResult<Self::N> {
        parse_from_next_token(input, &[TokenKind::Number], |token| match token.kind {
            // Kept as written: `1.2.3` is a valid NUMBER lexeme.
            TokenKind::Number => Some(ast::Value::NumberLiteral(token.lexeme)),
            _ => None,
        })
    }
}

struct StringLiteral;

impl Parser for StringLiteral {
    type N = ast::Value;

    fn parse(input: Input) -> ParseResult<Self::N> {
        parse_from_next_token(input, &[TokenKind::String], |token| match token.kind {
            TokenKind::String => Some(ast::Value::StringLiteral(
                strip_quotes(&token.lexeme).to_string(),
            )),
            _ => None,
        })
    }
}

/// Removes exactly one enclosing pair of double quotes, leaving the content untouched.
fn strip_quotes(lexeme: &str) -> &str {
    lexeme
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(lexeme)
}
