use crate::errors::CompilationError;
use crate::source::InputSpan;

pub fn unterminated_string(lexeme: &str, offset: usize) -> CompilationError {
    CompilationError::new("E0002", "unterminated string literal")
        .with_location(InputSpan::new(offset, offset + lexeme.len()))
        .with_subtitle("string literal is not closed before the end of the line")
        .with_free_note("string literals cannot span multiple lines")
}
