//! Syntax tree of a Corgi source file. This is the interface between the parser and whatever
//! consumes the parsed program.
//!
//! Every node exclusively owns its children, and nodes are never modified after the parser
//! builds them. Nodes carry no source locations, so two sources that only differ in whitespace
//! produce equal trees.

use crate::utils::sexp::{Sexp, ToSexp};

/// Root of the tree: a single class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilationUnit {
    pub class: ClassDeclaration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDeclaration {
    /// Always a non-empty identifier lexeme.
    pub name: String,

    /// Statements in source order.
    pub body: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    VariableDecl(VariableDecl),
    Print(PrintStatement),
}

impl Statement {
    /// Name of the variable the statement declares or prints.
    pub fn name(&self) -> &str {
        match self {
            Statement::VariableDecl(VariableDecl { name, .. }) => name,
            Statement::Print(PrintStatement { name }) => name,
        }
    }
}

/// `var <name> = <value>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableDecl {
    pub name: String,
    pub value: Value,
}

/// `print <name>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintStatement {
    pub name: String,
}

/// A literal value. Both variants keep the raw source text: numbers are not converted, and
/// strings only lose their enclosing quotes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    NumberLiteral(String),
    StringLiteral(String),
}

impl Value {
    pub fn text(&self) -> &str {
        match self {
            Value::NumberLiteral(text) => text,
            Value::StringLiteral(text) => text,
        }
    }
}

impl ToSexp for CompilationUnit {
    fn to_sexp(&self) -> Sexp {
        Sexp::form("compilation-unit", vec![self.class.to_sexp()])
    }
}

impl ToSexp for ClassDeclaration {
    fn to_sexp(&self) -> Sexp {
        let name = Sexp::atom(&self.name);
        Sexp::form("class", Some(name).into_iter().chain(self.body.iter().map(ToSexp::to_sexp)))
    }
}

impl ToSexp for Statement {
    fn to_sexp(&self) -> Sexp {
        match self {
            Statement::VariableDecl(VariableDecl { name, value }) => {
                Sexp::form("var", vec![Sexp::atom(name), value.to_sexp()])
            }
            Statement::Print(PrintStatement { name }) => {
                Sexp::form("print", vec![Sexp::atom(name)])
            }
        }
    }
}

impl ToSexp for Value {
    fn to_sexp(&self) -> Sexp {
        match self {
            Value::NumberLiteral(text) => Sexp::form("number", vec![Sexp::atom(text)]),
            Value::StringLiteral(text) => {
                Sexp::form("string", vec![Sexp::atom(format!("{:?}", text))])
            }
        }
    }
}
