//! Parser module for schedule phrases

pub mod grammar;

pub use grammar::*;

use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::spec::Spec;
use std::str::FromStr;

// ============================================================================
// CONVENIENCE FUNCTIONS
// ============================================================================

/// Parse a schedule phrase such as `"every day at 4pm"` into a [`Spec`].
pub fn parse(source: &str) -> Result<Spec, ParseError> {
    let tokens = Lexer::new(source).tokenize();
    let mut parser = Parser::new(tokens);

    match parser.parse() {
        Ok(spec) => {
            tracing::debug!(source, interval = %spec.interval(), "parsed schedule");
            Ok(spec)
        }
        Err(err) => {
            tracing::debug!(source, position = err.position, error = %err.message, "rejected schedule");
            Err(err)
        }
    }
}

/// Parse and re-render a phrase in canonical form.
pub fn round_trip(source: &str) -> Result<String, ParseError> {
    Ok(parse(source)?.to_string())
}

impl FromStr for Spec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
