//! Variable declaration statement parser.

use crate::ast;
use crate::parser::ident::Identifier;
use crate::parser::prelude::*;
use crate::parser::value::Value;

/// `variable := 'var' ID '=' value`
pub struct VarDeclStmt;

impl Parser for VarDeclStmt {
    type N = ast::Statement;

    fn parse(input: Input) -> ParseResult<Self::N> {
        <Seq4<KwVar, Identifier, Assign, Value>>::parse(input).map(|(_, name, _, value)| {
            ast::Statement::VariableDecl(ast::VariableDecl { name, value })
        })
    }
}
