//! Primary tokenizer definitions.

use crate::options::{NumberSyntax, ParserOptions};
use crate::parser::tokens::token::TokenKind;
use crate::parser::tokens::tokenizer::{Tokenizer, TokenizerRules};
use lazy_static::lazy_static;
use regex::Regex;

const PERMISSIVE_NUMBER: &str = r"^-?[0-9]+(\.[0-9]+)*";
const STRICT_NUMBER: &str = r"^-?[0-9]+(\.[0-9]+)?";

/// Rules of the Corgi language, with `NUMBER` accepting any number of digit groups.
pub struct PrimaryRules;

/// Same as `PrimaryRules`, but `NUMBER` has at most one fractional part.
pub struct StrictNumberRules;

impl TokenizerRules for PrimaryRules {
    fn rules() -> Vec<(Regex, TokenKind)> {
        rules_with_number(PERMISSIVE_NUMBER)
    }

    fn ignored_rule() -> Option<Regex> {
        Some(whitespace())
    }
}

impl TokenizerRules for StrictNumberRules {
    fn rules() -> Vec<(Regex, TokenKind)> {
        rules_with_number(STRICT_NUMBER)
    }

    fn ignored_rule() -> Option<Regex> {
        Some(whitespace())
    }
}

fn whitespace() -> Regex {
    Regex::new(r"^[ \t\r\n]*").unwrap()
}

fn rules_with_number(number: &str) -> Vec<(Regex, TokenKind)> {
    use TokenKind::*;

    let literal = |text: &str, kind| {
        let pattern = format!("^{}", regex::escape(text));
        (Regex::new(&pattern).unwrap(), kind)
    };

    vec![
        literal("{", LeftBrace),
        literal("}", RightBrace),
        literal("(", LeftParen),
        literal(",", Comma),
        literal(")", RightParen),
        literal("boolean", KwBoolean),
        literal("[", LeftBracket),
        literal("]", RightBracket),
        literal("string", KwString),
        literal("char", KwChar),
        literal("byte", KwByte),
        literal("short", KwShort),
        literal("int", KwInt),
        literal("long", KwLong),
        literal("float", KwFloat),
        literal("double", KwDouble),
        literal("void", KwVoid),
        literal("return", KwReturn),
        literal("if", KwIf),
        literal("else", KwElse),
        literal("->", Arrow),
        literal("*", Star),
        literal("/", Slash),
        literal("+", Plus),
        literal("-", Minus),
        literal(">", Greater),
        literal("<", Less),
        literal("==", DoubleEquals),
        literal("!=", NotEquals),
        literal(">=", GreaterEqual),
        literal("<=", LessEqual),
        literal("var", KwVar),
        literal("print", KwPrint),
        literal("=", Assign),
        (Regex::new(number).unwrap(), Number),
        (Regex::new(r#"^"[^"\r\n]*""#).unwrap(), String),
        (Regex::new(r"^[a-zA-Z0-9_]+").unwrap(), Identifier),
        (
            Regex::new(r"^[a-zA-Z0-9_]+(\.[a-zA-Z0-9_]+)+").unwrap(),
            QualifiedName,
        ),
    ]
}

lazy_static! {
    static ref PRIMARY_TOKENIZER: Tokenizer = Tokenizer::new::<PrimaryRules>();
    static ref STRICT_NUMBER_TOKENIZER: Tokenizer = Tokenizer::new::<StrictNumberRules>();
}

/// Returns the shared tokenizer matching `options`.
pub fn tokenizer_for(options: &ParserOptions) -> &'static Tokenizer {
    match options.numbers {
        NumberSyntax::Permissive => &PRIMARY_TOKENIZER,
        NumberSyntax::Strict => &STRICT_NUMBER_TOKENIZER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokens::tokenizer::LexicalError;

    fn first(source: &str) -> (TokenKind, String) {
        let (token, _) = PRIMARY_TOKENIZER.next(source, 0).unwrap();
        (token.kind, token.lexeme)
    }

    #[test]
    fn test_keyword_wins_exact_match() {
        assert_eq!(first("var x"), (TokenKind::KwVar, "var".to_string()));
        assert_eq!(first("print"), (TokenKind::KwPrint, "print".to_string()));
    }

    #[test]
    fn test_longer_identifier_beats_keyword() {
        assert_eq!(first("variable"), (TokenKind::Identifier, "variable".to_string()));
        assert_eq!(first("printer"), (TokenKind::Identifier, "printer".to_string()));
        assert_eq!(first("ifx"), (TokenKind::Identifier, "ifx".to_string()));
    }

    #[test]
    fn test_number_wins_tie_with_identifier() {
        assert_eq!(first("123 "), (TokenKind::Number, "123".to_string()));
        assert_eq!(first("123abc"), (TokenKind::Identifier, "123abc".to_string()));
    }

    #[test]
    fn test_operators_longest_match() {
        assert_eq!(first("->"), (TokenKind::Arrow, "->".to_string()));
        assert_eq!(first("=="), (TokenKind::DoubleEquals, "==".to_string()));
        assert_eq!(first(">= 1"), (TokenKind::GreaterEqual, ">=".to_string()));
        assert_eq!(first("= 1"), (TokenKind::Assign, "=".to_string()));
        assert_eq!(first("- x"), (TokenKind::Minus, "-".to_string()));
    }

    #[test]
    fn test_negative_number() {
        assert_eq!(first("-42"), (TokenKind::Number, "-42".to_string()));
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(first("foo.bar.baz"), (TokenKind::QualifiedName, "foo.bar.baz".to_string()));
        assert_eq!(first("1.2"), (TokenKind::Number, "1.2".to_string()));
    }

    #[test]
    fn test_permissive_number_accepts_many_groups() {
        assert_eq!(first("1.2.3"), (TokenKind::Number, "1.2.3".to_string()));
    }

    #[test]
    fn test_strict_number_stops_after_one_fraction() {
        let (token, _) = STRICT_NUMBER_TOKENIZER.next("1.25 ", 0).unwrap();
        assert_eq!((token.kind, token.lexeme.as_str()), (TokenKind::Number, "1.25"));

        // Without a permissive NUMBER rule, the dotted chain is only a qualified name.
        let (token, _) = STRICT_NUMBER_TOKENIZER.next("1.2.3", 0).unwrap();
        assert_eq!((token.kind, token.lexeme.as_str()), (TokenKind::QualifiedName, "1.2.3"));

        let (token, offset) = STRICT_NUMBER_TOKENIZER.next("-1.2.3", 0).unwrap();
        assert_eq!((token.kind, token.lexeme.as_str()), (TokenKind::Number, "-1.2"));
        assert_eq!(
            STRICT_NUMBER_TOKENIZER.next("-1.2.3", offset),
            Err(LexicalError::UnrecognizedCharacter {
                character: '.',
                offset: 4
            })
        );
    }

    #[test]
    fn test_ignored_prefix() {
        assert_eq!(PRIMARY_TOKENIZER.ignored_prefix(" \t\r\n x"), 5);
        assert_eq!(PRIMARY_TOKENIZER.ignored_prefix("x "), 0);
    }
}
