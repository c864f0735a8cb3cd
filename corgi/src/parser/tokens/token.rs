//! Definitions related to tokens.

use crate::source::InputSpan;
use std::fmt;

/// Category of a token.
///
/// Many kinds (type keywords, operators, control flow keywords) are not accepted by any grammar
/// rule yet. They still need their own kinds so that they are never mistaken for identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LeftBrace,
    RightBrace,
    LeftParen,
    Comma,
    RightParen,
    KwBoolean,
    LeftBracket,
    RightBracket,
    KwString,
    KwChar,
    KwByte,
    KwShort,
    KwInt,
    KwLong,
    KwFloat,
    KwDouble,
    KwVoid,
    KwReturn,
    KwIf,
    KwElse,
    Arrow,
    Star,
    Slash,
    Plus,
    Minus,
    Greater,
    Less,
    DoubleEquals,
    NotEquals,
    GreaterEqual,
    LessEqual,
    KwVar,
    KwPrint,
    Assign,
    Number,
    String,
    Identifier,
    QualifiedName,
    Eof,
}

impl TokenKind {
    /// How the token kind is spelled in messages shown to the user.
    pub fn describe(self) -> &'static str {
        use TokenKind::*;
        match self {
            LeftBrace => "'{'",
            RightBrace => "'}'",
            LeftParen => "'('",
            Comma => "','",
            RightParen => "')'",
            KwBoolean => "'boolean'",
            LeftBracket => "'['",
            RightBracket => "']'",
            KwString => "'string'",
            KwChar => "'char'",
            KwByte => "'byte'",
            KwShort => "'short'",
            KwInt => "'int'",
            KwLong => "'long'",
            KwFloat => "'float'",
            KwDouble => "'double'",
            KwVoid => "'void'",
            KwReturn => "'return'",
            KwIf => "'if'",
            KwElse => "'else'",
            Arrow => "'->'",
            Star => "'*'",
            Slash => "'/'",
            Plus => "'+'",
            Minus => "'-'",
            Greater => "'>'",
            Less => "'<'",
            DoubleEquals => "'=='",
            NotEquals => "'!='",
            GreaterEqual => "'>='",
            LessEqual => "'<='",
            KwVar => "'var'",
            KwPrint => "'print'",
            Assign => "'='",
            Number => "NUMBER",
            String => "STRING",
            Identifier => "ID",
            QualifiedName => "QUALIFIED_NAME",
            Eof => "end of file",
        }
    }

    /// Stable upper-case name of the kind, as used in token dumps.
    pub fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            LeftBrace => "LBRACE",
            RightBrace => "RBRACE",
            LeftParen => "LPAREN",
            Comma => "COMMA",
            RightParen => "RPAREN",
            KwBoolean => "KW_BOOLEAN",
            LeftBracket => "LBRACKET",
            RightBracket => "RBRACKET",
            KwString => "KW_STRING",
            KwChar => "KW_CHAR",
            KwByte => "KW_BYTE",
            KwShort => "KW_SHORT",
            KwInt => "KW_INT",
            KwLong => "KW_LONG",
            KwFloat => "KW_FLOAT",
            KwDouble => "KW_DOUBLE",
            KwVoid => "KW_VOID",
            KwReturn => "KW_RETURN",
            KwIf => "KW_IF",
            KwElse => "KW_ELSE",
            Arrow => "ARROW",
            Star => "STAR",
            Slash => "SLASH",
            Plus => "PLUS",
            Minus => "MINUS",
            Greater => "GT",
            Less => "LT",
            DoubleEquals => "EQ",
            NotEquals => "NEQ",
            GreaterEqual => "GE",
            LessEqual => "LE",
            KwVar => "KW_VAR",
            KwPrint => "KW_PRINT",
            Assign => "ASSIGN",
            Number => "NUMBER",
            String => "STRING",
            Identifier => "ID",
            QualifiedName => "QUALIFIED_NAME",
            Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Represents a token: a sequence of characters on the input atomic from a parser perspective.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,

    /// The exact source text matched by the token. Empty for `Eof`.
    pub lexeme: String,

    pub span: InputSpan,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: InputSpan) -> Token {
        Token {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    pub fn eof(offset: usize) -> Token {
        Token::new(TokenKind::Eof, "", InputSpan::empty_at(offset))
    }

    pub fn offset(&self) -> usize {
        self.span.start
    }

    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Short description for error messages: the kind, and the lexeme if it is not implied.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Number
            | TokenKind::String
            | TokenKind::Identifier
            | TokenKind::QualifiedName => format!("{} `{}`", self.kind.describe(), self.lexeme),
            kind => kind.describe().to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} @{}+{}",
            self.kind.name(),
            self.lexeme,
            self.offset(),
            self.len()
        )
    }
}
