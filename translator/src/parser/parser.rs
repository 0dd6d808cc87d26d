use std::{collections::HashSet, mem};

use tracing::debug;

use crate::{
    lexer::{
        Lexer,
        instruction::{OperandKind, Opcode, parse_opcode},
        token::{Token, TokenKind},
    },
    parser::{
        ParseError,
        document::{Arg, ArgKind, Document, Instruction},
    },
    stats::Stats,
};

/// Everything a successful parse produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub document: Document,
    pub stats: Stats,
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    curr_tok: Token,
    instructions: Vec<Instruction>,
    labels: HashSet<String>,
    // Jump targets not declared yet at the time of the jump.
    pending_jumps: Vec<String>,
    stats: Stats,
}

/// Which token kinds fill an operand role, and the argument kind they become.
pub fn accept_operand(role: OperandKind, kind: TokenKind) -> Option<ArgKind> {
    match (role, kind) {
        (OperandKind::Var, TokenKind::Var) => Some(ArgKind::Var),
        (OperandKind::Symb, kind) => ArgKind::of_symbol(kind),
        // Type keywords are lexically labels too.
        (OperandKind::Label, TokenKind::Label | TokenKind::Type) => Some(ArgKind::Label),
        (OperandKind::Type, TokenKind::Type) => Some(ArgKind::Type),
        _ => None,
    }
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Parser {
            lexer: Lexer::new(source),
            curr_tok: Token::eof(0),
            instructions: Vec::new(),
            labels: HashSet::new(),
            pending_jumps: Vec::new(),
            stats: Stats::default(),
        }
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.curr_tok = self.lexer.next_token()?;
        Ok(())
    }

    fn curr(&self) -> &Token {
        &self.curr_tok
    }

    /// Error for a token that does not belong where it is. A stray header is always a
    /// header error.
    fn unexpected(&self, message: String) -> ParseError {
        let span = self.curr().span.clone();
        if self.curr().kind == TokenKind::Header {
            ParseError::header("duplicate header", span)
        } else {
            ParseError::syntax(message, span)
        }
    }

    pub fn parse(mut self) -> Result<Translation, ParseError> {
        // Initialize the first token
        self.advance()?;
        self.parse_header()?;

        use TokenKind as TK;
        while self.curr().kind != TK::Eof {
            match self.curr().kind {
                TK::Eol => self.advance()?,
                TK::Header => return Err(self.unexpected(String::new())),
                _ => {
                    let ins = self.parse_instruction()?;
                    self.instructions.push(ins);
                }
            }
        }

        self.resolve_jumps();

        self.stats.instructions = self.instructions.len();
        self.stats.comments = self.lexer.comments();
        self.stats.labels = self.labels.len();

        debug!(
            instructions = self.stats.instructions,
            comments = self.stats.comments,
            labels = self.stats.labels,
            back_jumps = self.stats.back_jumps,
            forward_jumps = self.stats.forward_jumps,
            bad_jumps = self.stats.bad_jumps,
            "parsed program"
        );

        Ok(Translation {
            document: Document {
                instructions: self.instructions,
                ..Document::default()
            },
            stats: self.stats,
        })
    }

    fn parse_header(&mut self) -> Result<(), ParseError> {
        while self.curr().kind == TokenKind::Eol {
            self.advance()?;
        }

        if self.curr().kind != TokenKind::Header {
            return Err(ParseError::header("missing header", self.curr().span.clone()));
        }

        self.advance()?;
        if !self.curr().ends_line() {
            return Err(ParseError::header(
                "missing newline after header",
                self.curr().span.clone(),
            ));
        }

        Ok(())
    }

    fn parse_instruction(&mut self) -> Result<Instruction, ParseError> {
        let opcode = match self.curr().kind {
            TokenKind::Label => parse_opcode(&self.curr().text),
            _ => None,
        }
        .ok_or_else(|| {
            ParseError::unknown_instruction(
                &self.curr().text.to_ascii_uppercase(),
                self.curr().span.clone(),
            )
        })?;
        self.stats.record_opcode(opcode);

        let operands = opcode.operands();
        let mut args = Vec::with_capacity(operands.len());
        for (i, &role) in operands.iter().enumerate() {
            self.advance()?;

            let Some(kind) = accept_operand(role, self.curr().kind) else {
                return Err(self.unexpected(format!(
                    "{opcode} expects a {role} as argument {}, found {}",
                    i + 1,
                    self.curr().kind
                )));
            };

            let text = self.curr().text.clone();
            if role == OperandKind::Label {
                self.track_label(opcode, &text);
            }

            args.push(Arg {
                position: i + 1,
                kind,
                text,
            });
        }

        self.advance()?;
        if !self.curr().ends_line() {
            return Err(self.unexpected(format!("no newline after {opcode} instruction")));
        }

        let order = self.instructions.len() + 1;
        debug!(order, %opcode, args = args.len(), "instruction");

        Ok(Instruction {
            order,
            opcode,
            args,
        })
    }

    fn track_label(&mut self, opcode: Opcode, label: &str) {
        if opcode == Opcode::LABEL {
            if !self.labels.contains(label) {
                self.labels.insert(label.to_string());
            }
        } else if opcode.is_jump() {
            if self.labels.contains(label) {
                self.stats.back_jumps += 1;
            } else {
                self.pending_jumps.push(label.to_string());
            }
        }
    }

    /// Pending jumps to labels declared later are forward, the rest never resolve.
    fn resolve_jumps(&mut self) {
        for target in mem::take(&mut self.pending_jumps) {
            if self.labels.contains(&target) {
                self.stats.forward_jumps += 1;
            } else {
                debug!(%target, "jump to undeclared label");
                self.stats.bad_jumps += 1;
            }
        }
    }
}
