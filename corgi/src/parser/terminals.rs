//! Terminal node parsers for nodes that are trivially converted from tokens.

use crate::parser::common::{parse_from_next_token, ParseResult, Parser};
use crate::parser::input::Input;
use crate::parser::tokens::token::TokenKind;
use crate::source::InputSpan;

pub struct LeftBrace;
pub struct RightBrace;
pub struct Assign;

pub struct KwVar;
pub struct KwPrint;

/// End of input. Matches without consuming anything past the `Eof` token.
pub struct Eof;

macro_rules! impl_parser_from_token {
    ($name: ident) => {
        impl Parser for $name {
            type N = InputSpan;

            fn parse(input: Input) -> ParseResult<InputSpan> {
                parse_from_next_token(input, &[TokenKind::$name], |token| match token.kind {
                    TokenKind::$name => Some(token.span),
                    _ => None,
                })
            }
        }
    };
}

impl_parser_from_token!(LeftBrace);
impl_parser_from_token!(RightBrace);
impl_parser_from_token!(Assign);

impl_parser_from_token!(KwVar);
impl_parser_from_token!(KwPrint);

impl_parser_from_token!(Eof);
