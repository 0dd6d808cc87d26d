pub mod document;
mod error;
mod parser;

pub use error::*;
pub use parser::*;
