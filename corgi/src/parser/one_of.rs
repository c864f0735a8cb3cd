//! Parser combinators for nodes with multiple "alternative" productions.

use crate::parser::common::{ParseResult, ParsedNode, Parser};
use crate::parser::input::Input;
use std::marker::PhantomData;

/// Tries `P1`, and `P2` if `P1` is missing.
///
/// Alternatives are told apart by their first token, so at most one of them can start on any
/// input. If neither starts, the error lists the tokens expected by both.
pub struct OneOf2<P1: Parser, P2: Parser<N = P1::N>> {
    phantom: PhantomData<(P1, P2)>,
}

impl<P1: Parser, P2: Parser<N = P1::N>> Parser for OneOf2<P1, P2> {
    type N = P1::N;

    fn parse(input: Input) -> ParseResult<Self::N> {
        let ParseResult(node, input) = P1::parse(input);
        match node {
            ParsedNode::Missing(first_error) => {
                let ParseResult(node, input) = P2::parse(input);
                match node {
                    ParsedNode::Missing(second_error) => {
                        ParseResult(ParsedNode::Missing(first_error.merge(second_error)), input)
                    }
                    node => ParseResult(node, input),
                }
            }
            node => ParseResult(node, input),
        }
    }
}
