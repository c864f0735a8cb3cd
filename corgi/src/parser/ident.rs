//! Parser for identifiers.

use crate::parser::prelude::*;

pub struct Identifier;

impl Parser for Identifier {
    type N = String;

    fn parse(input: Input) -> ParseResult<Self::N> {
        parse_from_next_token(input, &[TokenKind::Identifier], |token| match token.kind {
            TokenKind::Identifier => Some(token.lexeme),
            _ => None,
        })
    }
}
