//! Compilation error definitions.

mod kinds;

use crate::parser::ParseError;
use crate::source::InputSpan;
use codespan_reporting::diagnostic::{Diagnostic, Label};

/// A user-caused error detected while reading the source.
///
/// Compilation errors are reported to the user and cause compilation to fail.
#[derive(Debug)]
pub struct CompilationError {
    /// Unique code identifying a class of errors.
    pub code: &'static str,

    /// Short (single-line) message describing the problem.
    pub message: String,

    /// Location in code where the problem occurred.
    pub location: Option<InputSpan>,

    /// Extended description of the problem that is shown directly next to code.
    pub subtitle: Option<String>,

    /// Useful information related to the error, not bound to any location.
    pub free_notes: Vec<String>,
}

pub use kinds::constructors::*;

impl CompilationError {
    /// Creates a new compilation error.
    ///
    /// Constructor functions from `kinds` should be used from the outside of this module.
    fn new(code: &'static str, message: impl Into<String>) -> CompilationError {
        CompilationError {
            code,
            message: message.into(),
            location: None,
            subtitle: None,
            free_notes: Vec::new(),
        }
    }

    /// Annotates an error with a location in source code which refers to the primary cause.
    fn with_location(self, location: InputSpan) -> CompilationError {
        CompilationError {
            location: Some(location),
            ..self
        }
    }

    /// Annotates an error with a subtitle to be displayed next to the primary cause location.
    fn with_subtitle(self, subtitle: impl Into<String>) -> CompilationError {
        CompilationError {
            subtitle: Some(subtitle.into()),
            ..self
        }
    }

    /// Annotates an error with a note that cannot be linked to source code in a meaningful way.
    fn with_free_note(mut self, note: impl Into<String>) -> CompilationError {
        self.free_notes.push(note.into());
        self
    }

    /// Builds a `codespan_reporting` diagnostic that can be used for displaying the error.
    pub fn to_codespan<I: Copy>(&self, file_id: I) -> Diagnostic<I> {
        let mut labels = Vec::new();

        if let Some(ref location) = self.location {
            let label = Label::primary(file_id, location.start..location.end);
            labels.push(match self.subtitle {
                Some(ref subtitle) => label.with_message(subtitle),
                None => label,
            });
        }

        Diagnostic::error()
            .with_code(self.code)
            .with_message(&self.message)
            .with_labels(labels)
            .with_notes(self.free_notes.clone())
    }
}

impl From<&ParseError> for CompilationError {
    fn from(error: &ParseError) -> CompilationError {
        match error {
            ParseError::Lexical(error) => lexical_error(error),
            ParseError::Syntax(error) => syntax_error(error),
        }
    }
}
