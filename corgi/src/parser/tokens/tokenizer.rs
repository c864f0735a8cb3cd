//! Definitions related to tokenizers.

use crate::parser::tokens::token::{Token, TokenKind};
use crate::source::InputSpan;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, trace};

pub trait TokenizerRules {
    fn rules() -> Vec<(Regex, TokenKind)>;
    fn ignored_rule() -> Option<Regex>;
}

/// A character sequence that no tokenizer rule accepts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexicalError {
    #[error("unrecognized character {character:?} at offset {offset}")]
    UnrecognizedCharacter { character: char, offset: usize },

    /// A string literal that is not closed before the end of its line.
    ///
    /// `lexeme` runs from the opening quote to the end of the line (or input).
    #[error("unterminated string literal {lexeme} at offset {offset}")]
    UnterminatedString { lexeme: String, offset: usize },
}

impl LexicalError {
    pub fn offset(&self) -> usize {
        match self {
            LexicalError::UnrecognizedCharacter { offset, .. } => *offset,
            LexicalError::UnterminatedString { offset, .. } => *offset,
        }
    }

    pub fn span(&self) -> InputSpan {
        match self {
            LexicalError::UnrecognizedCharacter { character, offset } => {
                InputSpan::new(*offset, *offset + character.len_utf8())
            }
            LexicalError::UnterminatedString { lexeme, offset } => {
                InputSpan::new(*offset, *offset + lexeme.len())
            }
        }
    }
}

/// Regex-based tokenizer.
///
/// Tokenizers are defined by a list of rules provided by `TokenizerRules`: `rules()` should
/// contain rules for tokens, ordered by precedence. The tokenizer will try all rules, and choose
/// the one that produces the longest match. In case of conflict, the first such rule is chosen.
pub struct Tokenizer {
    rules: Vec<(Regex, TokenKind)>,
    ignored_rule: Option<Regex>,
}

impl Tokenizer {
    pub fn new<Rules: TokenizerRules>() -> Tokenizer {
        let mut rules = Rules::rules();
        // `max_by_key` returns the last match if keys are equal, which causes the tokenizer to
        // prefer rules later in the list. To keep the interface as "first longest match", we
        // reverse the rule list internally.
        rules.reverse();
        Tokenizer {
            rules,
            ignored_rule: Rules::ignored_rule(),
        }
    }

    /// Scans the token starting at `offset`, skipping ignored characters first.
    ///
    /// Returns the token and the offset directly after it. Once only ignored characters remain,
    /// an `Eof` token is produced.
    pub fn next(&self, source: &str, offset: usize) -> Result<(Token, usize), LexicalError> {
        let start = offset + self.ignored_prefix(&source[offset..]);
        let rest = &source[start..];

        let first = match rest.chars().next() {
            Some(c) => c,
            None => return Ok((Token::eof(start), start)),
        };

        let longest = self
            .rules
            .iter()
            .filter_map(|(re, kind)| re.find(rest).map(|match_| (match_.end(), *kind)))
            .filter(|(length, _)| *length > 0)
            .max_by_key(|(length, _)| *length);

        match longest {
            Some((length, kind)) => {
                let end = start + length;
                let token = Token::new(kind, &rest[..length], InputSpan::new(start, end));
                Ok((token, end))
            }
            None if first == '"' => {
                let line_end = rest.find(|c: char| c == '\n' || c == '\r').unwrap_or(rest.len());
                Err(LexicalError::UnterminatedString {
                    lexeme: rest[..line_end].to_string(),
                    offset: start,
                })
            }
            None => Err(LexicalError::UnrecognizedCharacter {
                character: first,
                offset: start,
            }),
        }
    }

    /// Counts ignored characters at the beginning of the input.
    pub fn ignored_prefix(&self, input: &str) -> usize {
        self.ignored_rule
            .as_ref()
            .and_then(|ignored_rule| ignored_rule.find(input))
            .map(|match_| match_.end())
            .unwrap_or(0)
    }
}

/// Lazy sequence of tokens scanned from a source text.
///
/// Yields every token in source order followed by exactly one `Eof` token. Scanning stops at the
/// first lexical error: the error is yielded once, and the sequence ends after it.
pub struct Tokens<'a> {
    tokenizer: &'a Tokenizer,
    source: &'a str,
    offset: usize,
    finished: bool,
}

impl<'a> Tokens<'a> {
    pub fn new(tokenizer: &'a Tokenizer, source: &'a str) -> Tokens<'a> {
        Tokens {
            tokenizer,
            source,
            offset: 0,
            finished: false,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.tokenizer.next(self.source, self.offset) {
            Ok((token, offset)) => {
                trace!(
                    kind = token.kind.name(),
                    lexeme = %token.lexeme,
                    offset = token.offset(),
                    "token"
                );
                self.offset = offset;
                if token.kind == TokenKind::Eof {
                    self.finished = true;
                }
                Some(Ok(token))
            }
            Err(error) => {
                debug!(%error, "tokenizer stopped");
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}
