use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn eol(pos: usize) -> Self {
        Self::new(TokenKind::Eol, "\n", pos..pos + 1)
    }

    pub fn eof(pos: usize) -> Self {
        Self::new(TokenKind::Eof, "", pos..pos)
    }

    /// `true` for the two tokens allowed to terminate a line.
    pub fn ends_line(&self) -> bool {
        matches!(self.kind, TokenKind::Eol | TokenKind::Eof)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Label,
    Header,
    Var,
    Int,
    Bool,
    String,
    Nil,
    Type,
    Eol,
    Eof,
}

impl TokenKind {
    /// Value-type tag written in front of `@` in a symbol literal.
    pub fn from_type_tag(tag: &str) -> Option<TokenKind> {
        match tag {
            "int" => Some(TokenKind::Int),
            "bool" => Some(TokenKind::Bool),
            "string" => Some(TokenKind::String),
            "nil" => Some(TokenKind::Nil),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Label => "label",
            TokenKind::Header => "header",
            TokenKind::Var => "variable",
            TokenKind::Int => "int literal",
            TokenKind::Bool => "bool literal",
            TokenKind::String => "string literal",
            TokenKind::Nil => "nil literal",
            TokenKind::Type => "type",
            TokenKind::Eol => "end of line",
            TokenKind::Eof => "end of input",
        };
        f.write_str(name)
    }
}
