//! Parser for the class declaration.

use crate::ast;
use crate::parser::ident::Identifier;
use crate::parser::prelude::*;
use crate::parser::statements::Statement;

/// `classDeclaration := ID '{' classBody '}'`
pub struct ClassDeclaration;

impl Parser for ClassDeclaration {
    type N = ast::ClassDeclaration;

    fn parse(input: Input) -> ParseResult<Self::N> {
        <Seq3<Identifier, LeftBrace, ClassBody>>::parse(input)
            .map(|(name, _, body)| ast::ClassDeclaration { name, body })
    }
}

/// `classBody '}'`, where `classBody := (variable | print)*`
///
/// The body ends at the first token that cannot start a statement, which must be the closing
/// brace.
pub struct ClassBody;

impl Parser for ClassBody {
    type N = Vec<ast::Statement>;

    fn parse(input: Input) -> ParseResult<Self::N> {
        <RepeatUntil<Statement, RightBrace>>::parse(input).map(|(body, _)| body)
    }
}
