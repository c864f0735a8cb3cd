//! Options for controlling parser behavior.

/// Which forms of `NUMBER` literals the tokenizer accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberSyntax {
    /// Any number of dot-separated digit groups, e.g. `1.2.3`.
    ///
    /// This is how Corgi has always tokenized numbers, so it stays the default.
    Permissive,

    /// At most one fractional part. `1.2.3` is rejected at the second dot.
    Strict,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserOptions {
    pub numbers: NumberSyntax,
}

impl ParserOptions {
    pub fn strict() -> ParserOptions {
        ParserOptions {
            numbers: NumberSyntax::Strict,
        }
    }
}

impl Default for ParserOptions {
    fn default() -> ParserOptions {
        ParserOptions {
            numbers: NumberSyntax::Permissive,
        }
    }
}
