//! Repetition parser combinators.

use crate::parser::common::{ParseResult, ParsedNode, Parser};
use crate::parser::input::Input;
use std::marker::PhantomData;

/// Kleene star (repetition, `*`) followed by a mandatory terminator: `P* End`.
///
/// Consumes input until `P` returns `Missing`, then parses `End`. If `End` is missing too,
/// the error lists the tokens expected by both, since either would have been accepted there.
/// An `Aborted` item aborts the whole repetition.
pub struct RepeatUntil<P: Parser, End: Parser> {
    phantom: PhantomData<(P, End)>,
}

impl<P: Parser, End: Parser> Parser for RepeatUntil<P, End> {
    type N = (Vec<P::N>, End::N);

    fn parse(mut input: Input) -> ParseResult<Self::N> {
        let mut result = Vec::new();
        loop {
            let ParseResult(node, remaining) = P::parse(input);
            match node {
                ParsedNode::Ok(node) => {
                    result.push(node);
                    input = remaining;
                }
                ParsedNode::Missing(item_error) => {
                    let ParseResult(end, remaining) = End::parse(remaining);
                    let node = match end {
                        ParsedNode::Ok(end) => ParsedNode::Ok((result, end)),
                        ParsedNode::Missing(end_error) if result.is_empty() => {
                            ParsedNode::Missing(item_error.merge(end_error))
                        }
                        ParsedNode::Missing(end_error) => {
                            ParsedNode::Aborted(item_error.merge(end_error))
                        }
                        ParsedNode::Aborted(error) => ParsedNode::Aborted(error),
                    };
                    return ParseResult(node, remaining);
                }
                ParsedNode::Aborted(error) => {
                    return ParseResult(ParsedNode::Aborted(error), remaining)
                }
            }
        }
    }
}
