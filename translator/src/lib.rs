//! IPPcode24 source to XML translator.
//!
//! [`translate`] runs the lexer and parser over a whole source text and returns the
//! instruction [`Document`](parser::document::Document) together with the code
//! [`Stats`](stats::Stats) gathered in the same pass.

pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod stats;

pub use error::Error;
pub use parser::{ErrorKind, ParseError, Parser, Translation};

pub fn translate(source: &str) -> Result<Translation, ParseError> {
    Parser::new(source).parse()
}
