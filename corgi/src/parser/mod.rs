use crate::ast;
pub use crate::parser::common::{ParseError, SyntaxError};
use crate::parser::common::{ParseResult, ParsedNode, Parser};
use crate::parser::input::Input;
use crate::parser::tokens::token::Token;
use crate::parser::tokens::tokenizer::LexicalError;
use tracing::debug;

mod class_decl;
mod common;
mod compilation_unit;
mod ident;
mod input;
mod one_of;
mod prelude;
mod repeat;
mod seq;
mod statements;
mod terminals;
pub mod tokens;
mod value;

/// Parses a token sequence, constructing an `ast::CompilationUnit`.
///
/// Tokens are pulled only as far as the parser needs them. The first lexical or syntax error
/// stops the parse.
pub fn parse_tokens<'a, I>(tokens: I) -> Result<ast::CompilationUnit, ParseError>
where
    I: IntoIterator<Item = Result<Token, LexicalError>>,
    I::IntoIter: 'a,
{
    let input = Input::new(tokens);

    let ParseResult(unit, remaining) = compilation_unit::CompilationUnit::parse(input);
    match unit {
        ParsedNode::Ok(unit) => {
            debug!(
                class = %unit.class.name,
                statements = unit.class.body.len(),
                tokens = remaining.position(),
                "parsed compilation unit"
            );
            Ok(unit)
        }
        ParsedNode::Missing(error) | ParsedNode::Aborted(error) => {
            debug!(%error, offset = error.offset(), "parse failed");
            Err(error)
        }
    }
}
