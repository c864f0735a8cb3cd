//! Keeping track of input that is being parsed.

use crate::parser::tokens::token::{Token, TokenKind};
use crate::parser::tokens::tokenizer::LexicalError;
use std::cell::RefCell;
use std::rc::Rc;

type TokenSource<'a> = Box<dyn Iterator<Item = Result<Token, LexicalError>> + 'a>;

/// Represents a view into the token sequence at a certain location.
///
/// Tokens are pulled from the source lazily, the first time some `Input` needs them, and are
/// shared by all views through interior mutability. Conceptually `Input` is immutable: `pop`
/// creates a new view instead of advancing this one.
#[derive(Clone)]
pub struct Input<'a> {
    buffer: Rc<RefCell<TokenBuffer<'a>>>,
    position: usize,
}

impl<'a> Input<'a> {
    pub fn new<I>(tokens: I) -> Input<'a>
    where
        I: IntoIterator<Item = Result<Token, LexicalError>>,
        I::IntoIter: 'a,
    {
        Input {
            buffer: Rc::new(RefCell::new(TokenBuffer::new(Box::new(tokens.into_iter())))),
            position: 0,
        }
    }

    /// Returns the token at point of `Input`.
    ///
    /// Past the end of the sequence this keeps returning the `Eof` token. If the tokenizer
    /// failed before reaching this point, its error is returned instead.
    pub fn peek(&self) -> Result<Token, LexicalError> {
        self.buffer.borrow_mut().token_at(self.position)
    }

    /// Returns a new `Input` that points to a location directly after the token returned by `peek`.
    pub fn pop(&self) -> Input<'a> {
        Input {
            buffer: Rc::clone(&self.buffer),
            position: self.position + 1,
        }
    }

    /// Number of tokens consumed before this point.
    pub fn position(&self) -> usize {
        self.position
    }
}

struct TokenBuffer<'a> {
    source: TokenSource<'a>,
    tokens: Vec<Token>,
    error: Option<LexicalError>,
    exhausted: bool,
}

impl<'a> TokenBuffer<'a> {
    fn new(source: TokenSource<'a>) -> TokenBuffer<'a> {
        TokenBuffer {
            source,
            tokens: Vec::new(),
            error: None,
            exhausted: false,
        }
    }

    fn token_at(&mut self, position: usize) -> Result<Token, LexicalError> {
        while self.tokens.len() <= position && !self.exhausted {
            self.pull();
        }

        if let Some(token) = self.tokens.get(position) {
            return Ok(token.clone());
        }
        if let Some(ref error) = self.error {
            return Err(error.clone());
        }
        // `pull` always leaves an `Eof` token at the end once the source is exhausted
        // without an error.
        Ok(self
            .tokens
            .last()
            .cloned()
            .unwrap_or_else(|| Token::eof(0)))
    }

    fn pull(&mut self) {
        match self.source.next() {
            Some(Ok(token)) => {
                if token.kind == TokenKind::Eof {
                    self.exhausted = true;
                }
                self.tokens.push(token);
            }
            Some(Err(error)) => {
                self.error = Some(error);
                self.exhausted = true;
            }
            None => {
                // The source ended without an explicit `Eof` token.
                let end = self.tokens.last().map(|token| token.span.end).unwrap_or(0);
                self.tokens.push(Token::eof(end));
                self.exhausted = true;
            }
        }
    }
}
