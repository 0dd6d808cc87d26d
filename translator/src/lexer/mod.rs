pub mod instruction;
mod lexer;
pub mod literal;
pub mod token;

pub use lexer::*;
