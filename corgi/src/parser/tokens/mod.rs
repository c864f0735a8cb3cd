//! Definitions for tokens and tokenizers.
//!
//! A token is an "atomic" sequence of characters in the input that is treated by parsers as
//! indivisible. Tokenizers are routines that split raw input into tokens.
//!
//! Corgi source is split by a single tokenizer, but its `NUMBER` rule depends on
//! `ParserOptions`, so there are two rule tables, each compiled once per process.

pub mod primary;
pub mod token;
pub mod tokenizer;
