//! Class body statement parsers.

mod print;
mod var_decl;

use crate::ast;
use crate::parser::prelude::*;

pub use print::PrintStmt;
pub use var_decl::VarDeclStmt;

/// Any statement allowed in a class body, chosen by its leading keyword.
pub struct Statement;

impl Parser for Statement {
    type N = ast::Statement;

    fn parse(input: Input) -> ParseResult<Self::N> {
        <OneOf2<VarDeclStmt, PrintStmt>>::parse(input)
    }
}
