use crate::lexer::{instruction::Opcode, token::TokenKind};

pub const LANGUAGE: &str = "IPPcode24";

/// Parsed program. `instructions[i].order == i + 1` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub language: &'static str,
    pub instructions: Vec<Instruction>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            language: LANGUAGE,
            instructions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub order: usize,
    pub opcode: Opcode,
    pub args: Vec<Arg>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    pub position: usize,
    pub kind: ArgKind,
    pub text: String,
}

/// Value of the `type` attribute on an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Var,
    Int,
    Bool,
    String,
    Nil,
    Type,
    Label,
}

impl ArgKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ArgKind::Var => "var",
            ArgKind::Int => "int",
            ArgKind::Bool => "bool",
            ArgKind::String => "string",
            ArgKind::Nil => "nil",
            ArgKind::Type => "type",
            ArgKind::Label => "label",
        }
    }

    /// Argument kind of a symbol token, `None` for tokens that are not symbols.
    pub fn of_symbol(kind: TokenKind) -> Option<ArgKind> {
        match kind {
            TokenKind::Var => Some(ArgKind::Var),
            TokenKind::Int => Some(ArgKind::Int),
            TokenKind::Bool => Some(ArgKind::Bool),
            TokenKind::String => Some(ArgKind::String),
            TokenKind::Nil => Some(ArgKind::Nil),
            _ => None,
        }
    }
}
