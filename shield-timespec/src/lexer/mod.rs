//! Lexer module for schedule phrases

pub mod token;
pub mod scanner;

pub use token::*;
pub use scanner::*;
