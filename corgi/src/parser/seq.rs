//! Sequencing parser combinators.
//!
//! A sequence is `Missing` only if its first item is missing. Once the first item is consumed,
//! the sequence is committed to its production, and any later failure aborts the parse.

use crate::parser::prelude::*;
use std::marker::PhantomData;

/// Unwraps a successful node, or returns early from the enclosing `parse` with the failure.
macro_rules! item {
    ($result: expr, first) => {
        match $result {
            ParseResult(ParsedNode::Ok(node), input) => (node, input),
            ParseResult(ParsedNode::Missing(error), input) => {
                return ParseResult(ParsedNode::Missing(error), input)
            }
            ParseResult(ParsedNode::Aborted(error), input) => {
                return ParseResult(ParsedNode::Aborted(error), input)
            }
        }
    };
    ($result: expr, rest) => {
        match $result.commit() {
            ParseResult(ParsedNode::Ok(node), input) => (node, input),
            ParseResult(ParsedNode::Missing(error), input)
            | ParseResult(ParsedNode::Aborted(error), input) => {
                return ParseResult(ParsedNode::Aborted(error), input)
            }
        }
    };
}

/// Sequencing parser combinator constructor for 2-element sequences.
pub struct Seq2<P1: Parser, P2: Parser> {
    phantom: PhantomData<(P1, P2)>,
}

impl<P1: Parser, P2: Parser> Parser for Seq2<P1, P2> {
    type N = (P1::N, P2::N);

    fn parse(input: Input) -> ParseResult<Self::N> {
        let (n1, input) = item!(P1::parse(input), first);
        let (n2, input) = item!(P2::parse(input), rest);
        ParseResult(ParsedNode::Ok((n1, n2)), input)
    }
}

/// Sequencing parser combinator constructor for 3-element sequences.
pub struct Seq3<P1: Parser, P2: Parser, P3: Parser> {
    phantom: PhantomData<(P1, P2, P3)>,
}

impl<P1: Parser, P2: Parser, P3: Parser> Parser for Seq3<P1, P2, P3> {
    type N = (P1::N, P2::N, P3::N);

    fn parse(input: Input) -> ParseResult<Self::N> {
        let (n1, input) = item!(P1::parse(input), first);
        let (n2, input) = item!(P2::parse(input), rest);
        let (n3, input) = item!(P3::parse(input), rest);
        ParseResult(ParsedNode::Ok((n1, n2, n3)), input)
    }
}

/// Sequencing parser combinator constructor for 4-element sequences.
pub struct Seq4<P1: Parser, P2: Parser, P3: Parser, P4: Parser> {
    phantom: PhantomData<(P1, P2, P3, P4)>,
}

impl<P1: Parser, P2: Parser, P3: Parser, P4: Parser> Parser for Seq4<P1, P2, P3, P4> {
    type N = (P1::N, P2::N, P3::N, P4::N);

    fn parse(input: Input) -> ParseResult<Self::N> {
        let (n1, input) = item!(P1::parse(input), first);
        let (n2, input) = item!(P2::parse(input), rest);
        let (n3, input) = item!(P3::parse(input), rest);
        let (n4, input) = item!(P4::parse(input), rest);
        ParseResult(ParsedNode::Ok((n1, n2, n3, n4)), input)
    }
}
