//! S-expression rendering for syntax tree dumps.

/// A node of an s-expression: either a bare atom, or a parenthesized list of nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sexp {
    Atom(String),
    List(Vec<Sexp>),
}

pub trait ToSexp {
    fn to_sexp(&self) -> Sexp;
}

impl Sexp {
    pub fn atom(text: impl Into<String>) -> Sexp {
        Sexp::Atom(text.into())
    }

    /// A list headed by the atom `head`, e.g. `(print x)`.
    pub fn form(head: &str, args: impl IntoIterator<Item = Sexp>) -> Sexp {
        let mut elements = vec![Sexp::atom(head)];
        elements.extend(args);
        Sexp::List(elements)
    }

    /// Renders the expression on one line if it fits into `width` columns.
    ///
    /// A list that does not fit keeps its first element on the opening line, and puts every other
    /// element on its own line, indented by one column. Nested lists get two columns less.
    pub fn pretty_print(&self, width: usize) -> String {
        let elements = match self {
            Sexp::Atom(text) => return text.clone(),
            Sexp::List(elements) => elements,
        };

        let rendered: Vec<String> = elements
            .iter()
            .map(|element| element.pretty_print(width.saturating_sub(2)))
            .collect();

        let one_line_len = rendered.iter().map(String::len).sum::<usize>() + rendered.len() + 1;
        let fits = one_line_len <= width && rendered.iter().all(|element| !element.contains('\n'));
        if fits {
            return format!("({})", rendered.join(" "));
        }

        let mut lines = Vec::new();
        for (i, element) in rendered.iter().enumerate() {
            for (j, line) in element.lines().enumerate() {
                if (i, j) == (0, 0) || line.is_empty() {
                    lines.push(line.to_string());
                } else {
                    lines.push(format!(" {}", line));
                }
            }
        }
        format!("({})", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn print_x() -> Sexp {
        Sexp::form("print", vec![Sexp::atom("x")])
    }

    #[test]
    fn test_pretty_print_one_line() {
        let s = Sexp::form("class", vec![Sexp::atom("A"), print_x()]);
        assert_eq!(s.pretty_print(80), "(class A (print x))")
    }

    #[test]
    fn test_pretty_print_wrap() {
        let s = Sexp::form("class", vec![Sexp::atom("A"), print_x(), print_x()]);
        assert_eq!(s.pretty_print(12), "(class\n A\n (print x)\n (print x))")
    }

    #[test]
    fn test_pretty_print_nested_wrap() {
        let inner = Sexp::form("class", vec![Sexp::atom("A"), print_x()]);
        let s = Sexp::form("unit", vec![inner]);
        assert_eq!(s.pretty_print(14), "(unit\n (class\n  A\n  (print x)))")
    }

    #[test]
    fn test_pretty_print_empty_list() {
        assert_eq!(Sexp::List(vec![]).pretty_print(80), "()");
        assert_eq!(Sexp::List(vec![]).pretty_print(0), "()");
    }
}
