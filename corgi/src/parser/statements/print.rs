//! Parser for `print` statements.

use crate::ast;
use crate::parser::ident::Identifier;
use crate::parser::prelude::*;

/// `print := 'print' ID`
pub struct PrintStmt;

impl Parser for PrintStmt {
    type N = ast::Statement;

    fn parse(input: Input) -> ParseResult<Self::N> {
        <Seq2<KwPrint, Identifier>>::parse(input)
            .map(|(_, name)| ast::Statement::Print(ast::PrintStatement { name }))
    }
}
