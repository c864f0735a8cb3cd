//! Prelude for various parser modules.

pub use crate::parser::common::parse_from_next_token;
pub use crate::parser::common::ParseResult;
pub use crate::parser::common::ParsedNode;
pub use crate::parser::common::Parser;
pub use crate::parser::input::Input;
pub use crate::parser::one_of::OneOf2;
pub use crate::parser::repeat::RepeatUntil;
pub use crate::parser::seq::{Seq2, Seq3, Seq4};
pub use crate::parser::terminals::*;
pub use crate::parser::tokens::token::TokenKind;
