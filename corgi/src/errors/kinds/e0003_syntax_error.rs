use crate::errors::CompilationError;
use crate::parser::tokens::token::TokenKind;
use crate::parser::SyntaxError;

pub fn syntax_error(error: &SyntaxError) -> CompilationError {
    let subtitle = match error.expected.as_slice() {
        [TokenKind::Number, TokenKind::String] => "expected a value".to_string(),
        [TokenKind::KwVar, TokenKind::KwPrint, TokenKind::RightBrace] => {
            "expected a statement or the end of the class".to_string()
        }
        _ => format!("unexpected {}", error.found.describe()),
    };

    CompilationError::new("E0003", format!("syntax error: {}", error))
        .with_location(error.found.span)
        .with_subtitle(subtitle)
}
