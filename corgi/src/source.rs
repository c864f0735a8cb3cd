//! Locations in the source code.

/// A half-open range of bytes `[start, end)` in the source text.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct InputSpan {
    pub start: usize,
    pub end: usize,
}

impl InputSpan {
    pub fn new(start: usize, end: usize) -> InputSpan {
        InputSpan { start, end }
    }

    /// An empty span located at `offset`.
    pub fn empty_at(offset: usize) -> InputSpan {
        InputSpan {
            start: offset,
            end: offset,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
