//! Definitions of abstractions used throughout the `parser` module tree.

use crate::parser::input::Input;
use crate::parser::tokens::token::{Token, TokenKind};
use crate::parser::tokens::tokenizer::LexicalError;
use thiserror::Error;

/// The token sequence does not match the grammar.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("expected {}, found {}", describe_expected(.expected), .found.describe())]
pub struct SyntaxError {
    /// Token kinds that would have been accepted at this point.
    pub expected: Vec<TokenKind>,

    /// The token actually found.
    pub found: Token,
}

impl SyntaxError {
    pub fn new(expected: Vec<TokenKind>, found: Token) -> SyntaxError {
        SyntaxError { expected, found }
    }

    pub fn offset(&self) -> usize {
        self.found.offset()
    }

    /// Combines the expectations of two alternatives that failed on the same token.
    fn merge(mut self, other: SyntaxError) -> SyntaxError {
        for kind in other.expected {
            if !self.expected.contains(&kind) {
                self.expected.push(kind);
            }
        }
        self
    }
}

fn describe_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [kind] => kind.describe().to_string(),
        [init @ .., last] => {
            let init: Vec<_> = init.iter().map(|kind| kind.describe()).collect();
            format!("{} or {}", init.join(", "), last.describe())
        }
    }
}

/// The first problem found while parsing a source file.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lexical(#[from] LexicalError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Lexical(error) => error.offset(),
            ParseError::Syntax(error) => error.offset(),
        }
    }

    /// Merges expectations if both errors are syntax errors at the same token.
    ///
    /// Otherwise `self` is kept: it was encountered first.
    pub(crate) fn merge(self, other: ParseError) -> ParseError {
        match (self, other) {
            (ParseError::Syntax(first), ParseError::Syntax(second))
                if first.found == second.found =>
            {
                ParseError::Syntax(first.merge(second))
            }
            (first, _) => first,
        }
    }
}

/// A parser routine that produces a node of type `N`.
///
/// Parsers are typically composed of other parsers, similarly to how rules in grammars
/// derive other, constituent rules.
pub trait Parser {
    type N;
    fn parse(input: Input) -> ParseResult<Self::N>;
}

/// Node parsed by a parsing routine.
///
/// `Ok` case is the actual node produced by a successful parse. `Missing` appears when the
/// expected node was not found, and nothing was consumed, so the caller may try something else.
/// `Aborted` is produced when the parser consumed some input and then failed, or when the
/// tokenizer failed: there is no way to continue, and the error is final.
#[derive(Debug)]
pub enum ParsedNode<T> {
    Ok(T),
    Missing(ParseError),
    Aborted(ParseError),
}

impl<T> ParsedNode<T> {
    /// Converts a `Missing` node into an `Aborted` one. Used once a sequence has committed to
    /// a production by consuming its first item.
    pub fn commit(self) -> ParsedNode<T> {
        match self {
            ParsedNode::Missing(error) => ParsedNode::Aborted(error),
            node => node,
        }
    }
}

/// Result of running a parsing routine.
///
/// First element is the parsed node, second is the remainder of the input that was not consumed
/// by the parse.
pub struct ParseResult<'a, T>(pub ParsedNode<T>, pub Input<'a>);

impl<'a, T> ParseResult<'a, T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<'a, U> {
        let ParseResult(node, input) = self;
        let node = match node {
            ParsedNode::Ok(node) => ParsedNode::Ok(f(node)),
            ParsedNode::Missing(error) => ParsedNode::Missing(error),
            ParsedNode::Aborted(error) => ParsedNode::Aborted(error),
        };
        ParseResult(node, input)
    }

    pub fn commit(self) -> ParseResult<'a, T> {
        let ParseResult(node, input) = self;
        ParseResult(node.commit(), input)
    }
}

/// Consumes the next token if `f` accepts it, producing the node returned by `f`.
///
/// If the next token is not accepted, the result is `Missing` with `expected` as the set of
/// acceptable token kinds.
pub fn parse_from_next_token<'a, T>(
    input: Input<'a>,
    expected: &[TokenKind],
    f: impl FnOnce(Token) -> Option<T>,
) -> ParseResult<'a, T> {
    let token = match input.peek() {
        Ok(token) => token,
        Err(error) => return ParseResult(ParsedNode::Aborted(error.into()), input),
    };

    match f(token.clone()) {
        Some(node) => ParseResult(ParsedNode::Ok(node), input.pop()),
        None => {
            let error = SyntaxError::new(expected.to_vec(), token);
            ParseResult(ParsedNode::Missing(error.into()), input)
        }
    }
}
