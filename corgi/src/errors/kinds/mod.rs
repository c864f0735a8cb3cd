mod e0001_unrecognized_character;
mod e0002_unterminated_string;
mod e0003_syntax_error;

pub mod constructors {
    use crate::errors::CompilationError;
    use crate::parser::tokens::tokenizer::LexicalError;

    pub use super::e0001_unrecognized_character::unrecognized_character;
    pub use super::e0002_unterminated_string::unterminated_string;
    pub use super::e0003_syntax_error::syntax_error;

    pub fn lexical_error(error: &LexicalError) -> CompilationError {
        match error {
            LexicalError::UnrecognizedCharacter { character, offset } => {
                unrecognized_character(*character, *offset)
            }
            LexicalError::UnterminatedString { lexeme, offset } => {
                unterminated_string(lexeme, *offset)
            }
        }
    }
}
