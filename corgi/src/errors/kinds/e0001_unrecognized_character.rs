use crate::errors::CompilationError;
use crate::source::InputSpan;

pub fn unrecognized_character(character: char, offset: usize) -> CompilationError {
    CompilationError::new(
        "E0001",
        format!("unrecognized character {:?}", character),
    )
    .with_location(InputSpan::new(offset, offset + character.len_utf8()))
    .with_subtitle("no token starts with this character")
}
