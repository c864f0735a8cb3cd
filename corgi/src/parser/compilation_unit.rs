//! Top-level parser for the entire source file.

use crate::ast;
use crate::parser::class_decl::ClassDeclaration;
use crate::parser::prelude::*;

/// `compilationUnit := classDeclaration EOF`
pub struct CompilationUnit;

impl Parser for CompilationUnit {
    type N = ast::CompilationUnit;

    fn parse(input: Input) -> ParseResult<Self::N> {
        <Seq2<ClassDeclaration, Eof>>::parse(input).map(|(class, _)| ast::CompilationUnit { class })
    }
}
