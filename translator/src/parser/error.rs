use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Every way a translation can fail, as seen by whoever runs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    InputIo,
    OutputIo,
    Header,
    UnknownInstruction,
    Syntax,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Usage => 10,
            ErrorKind::InputIo => 11,
            ErrorKind::OutputIo => 12,
            ErrorKind::Header => 21,
            ErrorKind::UnknownInstruction => 22,
            ErrorKind::Syntax => 23,
        }
    }
}

/// A lexical or grammatical error. `span` counts chars, which is what ariadne expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
    pub span: Range<usize>,
}

impl ParseError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }

    pub fn header(message: impl Into<String>, span: Range<usize>) -> Self {
        Self::new(ErrorKind::Header, message, span)
    }

    pub fn unknown_instruction(opcode: &str, span: Range<usize>) -> Self {
        Self::new(
            ErrorKind::UnknownInstruction,
            format!("unknown instruction: {opcode}"),
            span,
        )
    }

    pub fn syntax(message: impl Into<String>, span: Range<usize>) -> Self {
        Self::new(ErrorKind::Syntax, message, span)
    }

    /// Prints a labelled snippet of `src` to stderr.
    pub fn report(&self, file: &str, src: &str) -> std::io::Result<()> {
        Report::build(ReportKind::Error, (file, self.span.clone()))
            .with_code(self.kind.exit_code())
            .with_message(&self.message)
            .with_label(
                Label::new((file, self.span.clone()))
                    .with_message("here")
                    .with_color(Color::Red),
            )
            .finish()
            .eprint((file, Source::from(src)))
    }
}
